//! Domain records persisted by the storage façade.
//!
//! Field names serialize in camelCase so the stored JSON matches the
//! established key-value layout (`pricingTier`, `uploadDate`, ...).

pub mod application;
pub mod blog;
pub mod designer;
pub mod font;
pub mod purchase;
pub mod user;

pub use application::{ApplicationSocialLinks, DesignerApplication};
pub use blog::BlogPost;
pub use designer::{Designer, DesignerSocialLinks};
pub use font::Font;
pub use purchase::{Purchase, PurchaseWithFont};
pub use user::{User, UserSocialLinks};
