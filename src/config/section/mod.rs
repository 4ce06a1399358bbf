//! Configuration section definitions.
//!
//! | Section    | Purpose                                   |
//! |------------|-------------------------------------------|
//! | `[site]`   | Title, URL, description, logo             |
//! | `[author]` | The author embedded in every record       |

mod author;
mod site;

pub use author::{AddressConfig, AlumniConfig, AuthorConfig, CredentialConfig};
pub use site::SiteInfoConfig;
