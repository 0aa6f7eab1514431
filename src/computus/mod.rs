//! Paschal computi: the integer-arithmetic rules that fix the date of Easter
//! and related feasts for a year.
//!
//! | Function | Algorithm | Calendar of the result |
//! |----------|-----------|------------------------|
//! | [`easter`] | Gauss | civil (Julian before 1583, Gregorian after) |
//! | [`pascha`] | Meeus' Julian | always Julian |
//! | [`memorial`] | paschal full moon (Nisan 14) | civil |

pub use gauss::easter;
pub use meeus::pascha;
pub use memorial::memorial;

mod gauss;
mod meeus;
mod memorial;
