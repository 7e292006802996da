//! Password generation and strength scoring library
//!
//! This library generates random passwords, memorable passphrases and PINs
//! under per-class constraints, scores every result on a 0-100 scale and
//! keeps a bounded history of what was generated.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable evaluation for UIs
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom word list for memorable passwords
//!   (default: `./assets/wordlist.txt`, loaded by [`init_wordlist`])
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_gen::{GenerationRequest, PasswordGenerator, evaluate_password_strength};
//! use secrecy::SecretString;
//!
//! let generator = PasswordGenerator::new();
//! let generated = generator
//!     .generate_password(&GenerationRequest::default())
//!     .expect("Default request is valid");
//! println!("Strength: {} ({}/100)", generated.strength.tier, generated.strength.score);
//!
//! // Scoring is deterministic
//! let again = evaluate_password_strength(&generated.password);
//! assert_eq!(again, generated.strength);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! println!("{:?}", evaluate_password_strength(&password).feedback);
//! ```

// Internal modules
mod charset;
mod error;
mod evaluator;
mod generator;
mod history;
mod sections;
mod types;
mod validator;
mod wordlist;

// Public API
pub use charset::{CharClass, ClassSelection, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use error::{InvalidRequest, PasswordError, Requirement};
pub use evaluator::evaluate_password_strength;
pub use generator::{
    GenerationRequest, MAX_GENERATED_LENGTH, MIN_GENERATED_LENGTH, PasswordGenerator,
};
pub use history::{HISTORY_CAPACITY, History, HistoryEntry};
pub use types::{GeneratedPassword, StrengthResult, StrengthTier};
pub use validator::{ValidationPolicy, validate_password};
pub use wordlist::{
    DEFAULT_WORDS, WordlistError, active_words, get_wordlist_path, init_wordlist,
    init_wordlist_from_path,
};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_cancellable, evaluate_password_strength_tx};
