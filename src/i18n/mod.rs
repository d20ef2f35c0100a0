// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language handling for game-strings.
//!
//! ## Supported languages
//!
//! | Code | Language              |
//! |------|-----------------------|
//! | ja   | Japanese              |
//! | en   | English (default)     |
//! | fr   | French                |
//! | it   | Italian               |
//! | de   | German                |
//! | es   | Spanish               |
//! | ko   | Korean                |
//! | zh   | Chinese (simplified)  |
//! | zh2  | Chinese (traditional) |
//! | pt   | Portuguese            |
//!
//! Any table missing for a language is taken from English instead; see
//! [`crate::strings::LanguageCatalog`].

mod lang;

pub use lang::Lang;
