//! Build-time detection of the textual-conversion capability.
//!
//! Rich assertion output needs the textual form of a value, but not every
//! value has one. [`Probe`] selects between the two paths during method
//! resolution: `(&Probe(&value)).render()` picks [`RenderDisplayed`] when the
//! value's type implements [`Display`], and falls through one auto-ref step to
//! [`RenderOpaque`] otherwise. The choice is made by the compiler at the call
//! site, so it only works where the value's type is concrete, which is why
//! the assertion macros perform the probe rather than generic functions.
//!
//! A type opts in to rich output by implementing [`Display`].

use std::fmt::Display;

/// Borrowed value under inspection.
pub struct Probe<'a, T: ?Sized>(pub &'a T);

/// Selected when the probed type implements [`Display`].
pub trait RenderDisplayed {
    fn render(&self) -> Option<String>;
}

impl<T: Display + ?Sized> RenderDisplayed for Probe<'_, T> {
    fn render(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Fallback for types without a textual form.
pub trait RenderOpaque {
    fn render(&self) -> Option<String>;
}

impl<T: ?Sized> RenderOpaque for &Probe<'_, T> {
    fn render(&self) -> Option<String> {
        None
    }
}

/// Renders a reference through [`Probe`]; `None` when the referent has no
/// textual form.
#[doc(hidden)]
#[macro_export]
macro_rules! __render {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::capability::{RenderDisplayed as _, RenderOpaque as _};
        (&$crate::capability::Probe($value)).render()
    }};
}
