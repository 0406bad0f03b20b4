//! Display masking for email addresses.
//!
//! - **`span`**: the string primitive (`MaskSpan`, replace one run of
//!   characters with mask characters)
//! - **`policy`**: the email rule (`EmailMaskPolicy`, which span to mask for a
//!   given local-part length)

mod policy;
mod span;

pub use policy::{EmailMaskPolicy, DEFAULT_MASK_CHAR, REDACTED_PLACEHOLDER};
pub(crate) use span::MaskSpan;
