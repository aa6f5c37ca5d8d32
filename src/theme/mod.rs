//! Design tokens composed into a single theme.
//!
//! Colors, typography, spacing, breakpoints, shadows and corner radii are
//! independent token groups. [`Theme`] bundles them, is installed into the
//! app context as a gpui global and is read back through [`ThemeExt`] or
//! the `Theme*Kind` enums.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod validate;
pub use validate::*;

mod lookup;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
