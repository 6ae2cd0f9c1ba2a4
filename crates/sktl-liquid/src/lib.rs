//! SKTL to Liquid template conversion
//!
//! Converts school website templates written in SKTL into Liquid. Input is
//! the segment tree produced by an external SKTL parser; output is Liquid
//! text ready for the platform's renderer.
//!
//! # Example
//!
//! ```
//! use sktl_liquid::{Segment, Template, convert_document};
//!
//! // {{ courses.each 'course' }}<li>{{ course.name }}</li>{{ end }}
//! let template = Template::new(vec![
//!     Segment::chain(vec![
//!         Segment::var("courses"),
//!         Segment::call("each", vec![Segment::string("course")]),
//!     ]),
//!     Segment::text("<li>"),
//!     Segment::path("course.name"),
//!     Segment::text("</li>"),
//!     Segment::Ending,
//! ]);
//!
//! let liquid = convert_document(&template)?;
//! assert_eq!(liquid, "{% for course in courses %}<li>{{ course.name }}</li>{% endfor %}");
//! # Ok::<(), sktl_liquid::ConvertError>(())
//! ```

// Re-export all public APIs from internal crates
pub use sktl_liquid_ast as ast;
pub use sktl_liquid_convert as convert;
pub use sktl_liquid_diagnostics as diagnostics;

// Convenience re-exports
pub use sktl_liquid_ast::{Segment, Template};
pub use sktl_liquid_convert::{ConvertError, ConvertResult, Converter, post_process};

/// Convert a parsed template to Liquid with a fresh converter
pub fn convert_document(template: &Template) -> ConvertResult<String> {
    Converter::new().convert_document(template.segments())
}

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
