//! SKTL to Liquid converter
//!
//! Walks a parsed SKTL segment tree and renders the equivalent Liquid text.
//! Only top-level segments are wrapped in `{{ }}` / `{% %}`; nested segments
//! render to bare expression text.

use crate::kind::{Kind, classify};
use crate::scope::{ScopeKind, ScopeStack};
use crate::{ConvertError, ConvertResult, post_process, tables};
use sktl_liquid_ast::{Call, Operator, Segment};

/// SKTL to Liquid converter
///
/// Holds the block scope stack of the document being converted. Each call to
/// [`Converter::convert_document`] starts from an empty stack.
#[derive(Debug, Default)]
pub struct Converter {
    /// Blocks opened and not yet closed
    scopes: ScopeStack,
}

impl Converter {
    /// Create a new converter
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a document's top-level segments to Liquid
    pub fn convert_document(&mut self, segments: &[Segment]) -> ConvertResult<String> {
        self.scopes.clear();

        let mut liquid = String::new();
        for segment in segments {
            liquid.push_str(&self.convert_toplevel(segment)?);
        }

        if !self.scopes.is_empty() {
            log::warn!(
                "document ends with {} open block(s): {:?}",
                self.scopes.depth(),
                self.scopes.as_slice()
            );
        }

        let liquid = post_process(&liquid);
        log::debug!(
            "converted {} top-level segment(s) into {} byte(s) of Liquid",
            segments.len(),
            liquid.len()
        );
        Ok(liquid)
    }

    /// Blocks still open after the last conversion, outermost first
    pub fn open_scopes(&self) -> &[ScopeKind] {
        self.scopes.as_slice()
    }

    /// Convert a top-level segment and wrap it in its Liquid tag
    pub fn convert_toplevel(&mut self, segment: &Segment) -> ConvertResult<String> {
        let inner = self.convert_segment(segment)?;
        Ok(classify(segment).wrap(&inner))
    }

    /// Convert any segment to unwrapped Liquid text
    pub fn convert_segment(&mut self, segment: &Segment) -> ConvertResult<String> {
        let kind = classify(segment);
        log::trace!("converting {} segment as {}", segment.tag_name(), kind);

        match (kind, segment) {
            (Kind::Text, Segment::Text(text))
            | (Kind::StringLiteral, Segment::StringLiteral(text))
            | (Kind::NumberLiteral, Segment::NumberLiteral(text)) => Ok(text.clone()),
            (Kind::Chain, Segment::Chain(items)) => self.convert_chain(items),
            (Kind::CallOrVariable | Kind::Else, Segment::CallOrVariable(var)) => {
                Ok(var.name.clone())
            }
            (Kind::Call, Segment::Call(call)) => self.convert_call(call),
            (Kind::Ending, Segment::Ending) => self.convert_ending(),
            (Kind::Loop, Segment::Chain(items)) => self.convert_loop(segment, items),
            (Kind::Partial, Segment::Call(call)) => convert_partial(segment, call),
            (Kind::EnrolledIn, Segment::Call(call)) => Ok(call.name.clone()),
            (Kind::AccessCourse, Segment::Call(_)) => {
                Ok(tables::ACCESS_COURSE_REPLACEMENT.to_string())
            }
            (Kind::Pluralize, Segment::Call(call)) => self.convert_pluralize(segment, call),
            (Kind::App, Segment::Chain(items)) => convert_app(segment, items),
            (Kind::LearningPathItem, Segment::Call(call)) => {
                self.scopes.push(ScopeKind::LearningPathItem);
                let args = self.convert_args(call)?;
                Ok(format!("{} {}", call.name, args))
            }
            (Kind::DisplaySearchForm, Segment::Call(call)) => {
                self.convert_display_search_form(segment, call)
            }
            (Kind::Filter, Segment::Call(_) | Segment::CallOrVariable(_)) => {
                self.convert_filter(segment)
            }
            (Kind::Operator(_), Segment::Operator(op)) => self.convert_operator(segment, op),
            _ => Err(ConvertError::unsupported(segment)),
        }
    }

    // === Expressions ===

    /// `course.name.downcase` -> `course.name | downcase`
    fn convert_chain(&mut self, items: &[Segment]) -> ConvertResult<String> {
        let mut body = String::new();

        for (index, item) in items.iter().enumerate() {
            let kind = classify(item);
            if kind == Kind::Filter {
                body.push(' ');
            } else if index > 0 && !kind.is_operator() {
                body.push('.');
            }
            body.push_str(&self.convert_segment(item)?);
        }

        Ok(body)
    }

    /// Convert call arguments and join them with `, `
    fn convert_args(&mut self, call: &Call) -> ConvertResult<String> {
        let args = call
            .args()
            .iter()
            .map(|arg| self.convert_segment(arg))
            .collect::<ConvertResult<Vec<_>>>()?;
        Ok(args.join(", "))
    }

    /// Generic call; `if`/`unless` also open a block and may gain a
    /// `.any?` or `.signed_in?` suffix
    fn convert_call(&mut self, call: &Call) -> ConvertResult<String> {
        let args = self.convert_args(call)?;

        if let Some(scope) = ScopeKind::conditional(&call.name) {
            self.scopes.push(scope);

            if tables::is_array_empty_check(&args) {
                return Ok(format!("{} {}.any?", call.name, args));
            }
            if tables::is_signed_in_check(&args) {
                return Ok(format!("{} {}.signed_in?", call.name, args));
            }
        }

        Ok(format!("{} {}", call.name, args))
    }

    /// `{:greater=>{:op=>"> ", :arg=>{:number=>"3"}}}` -> ` > 3`
    fn convert_operator(&mut self, segment: &Segment, op: &Operator) -> ConvertResult<String> {
        let glyph = op.glyph();
        let token = tables::operator_token(glyph).ok_or_else(|| {
            ConvertError::malformed(
                Kind::Operator(op.tag),
                format!("unknown operator glyph `{}`", glyph),
                segment,
            )
        })?;

        let operand = match op.arg.as_ref() {
            Segment::StringLiteral(value) if tables::quotes_string_operand(glyph) => {
                format!("'{}'", value)
            }
            arg => self.convert_segment(arg)?,
        };

        Ok(format!(" {} {}", token, operand))
    }

    /// `name.truncate_words 1, ''` -> `| truncatewords: 1, ""`
    fn convert_filter(&mut self, segment: &Segment) -> ConvertResult<String> {
        let (name, args) = match segment {
            Segment::Call(call) => (call.name.as_str(), call.args()),
            Segment::CallOrVariable(var) => (var.name.as_str(), &[][..]),
            _ => return Err(ConvertError::unsupported(segment)),
        };

        if args.is_empty() {
            return Ok(format!("| {}", name));
        }

        let args = args
            .iter()
            .map(|arg| match arg {
                Segment::NumberLiteral(number) => Ok(number.clone()),
                Segment::StringLiteral(value) => Ok(format!("\"{}\"", value)),
                other => self.convert_segment(other),
            })
            .collect::<ConvertResult<Vec<_>>>()?
            .join(", ");

        Ok(format!("| {}: {}", tables::filter_name(name), args))
    }

    // === Blocks ===

    /// `courses.each 'course'` -> `for course in courses`
    fn convert_loop(&mut self, segment: &Segment, items: &[Segment]) -> ConvertResult<String> {
        let Some((each, collection)) = items.split_last() else {
            return Err(ConvertError::malformed(Kind::Loop, "empty chain", segment));
        };
        let Some(each) = each.as_call_named("each") else {
            return Err(ConvertError::malformed(
                Kind::Loop,
                "`each` must be the last element of the chain",
                segment,
            ));
        };
        let variable = match each.single_arg() {
            Some(arg @ Segment::StringLiteral(_)) => self.convert_segment(arg)?,
            _ => {
                return Err(ConvertError::malformed(
                    Kind::Loop,
                    "`each` takes exactly one string literal naming the loop variable",
                    segment,
                ));
            }
        };
        if collection.is_empty() {
            return Err(ConvertError::malformed(
                Kind::Loop,
                "missing collection before `each`",
                segment,
            ));
        }

        let collection = self.convert_chain(collection)?;
        self.scopes.push(ScopeKind::For);

        Ok(format!("for {} in {}", variable, collection))
    }

    fn convert_ending(&mut self) -> ConvertResult<String> {
        self.scopes
            .pop()
            .map(|scope| scope.end_tag())
            .ok_or(ConvertError::UnbalancedScope)
    }

    /// `if display_search_form` -> `search`
    fn convert_display_search_form(
        &mut self,
        segment: &Segment,
        call: &Call,
    ) -> ConvertResult<String> {
        let scope = match call.single_arg() {
            Some(Segment::CallOrVariable(var)) if var.name == "display_search_form" => {
                ScopeKind::Search
            }
            Some(Segment::CallOrVariable(var)) if var.name == "display_catalog_search_form" => {
                ScopeKind::CatalogSearch
            }
            _ => {
                return Err(ConvertError::malformed(
                    Kind::DisplaySearchForm,
                    "expected `display_search_form` or `display_catalog_search_form`",
                    segment,
                ));
            }
        };

        self.scopes.push(scope);
        Ok(scope.as_str().to_string())
    }

    // === Helpers ===

    /// `pluralize(count, t('.course.one'), t('.course.many'))` -> `pluralize count, .course`
    fn convert_pluralize(&mut self, segment: &Segment, call: &Call) -> ConvertResult<String> {
        let [count, one, _many] = call.args() else {
            return Err(ConvertError::malformed(
                Kind::Pluralize,
                "expected a count and two translation keys",
                segment,
            ));
        };

        let key = match one {
            Segment::Call(t) => t.single_arg().and_then(Segment::as_string_literal),
            _ => None,
        }
        .and_then(|key| key.split('.').nth(1))
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            ConvertError::malformed(
                Kind::Pluralize,
                "singular form must be a translation call like t('.key.one')",
                segment,
            )
        })?;

        let count = self.convert_segment(count)?;
        Ok(format!("pluralize {}, .{}", count, key))
    }
}

/// `partial 'course'` -> `include "course"`
fn convert_partial(segment: &Segment, call: &Call) -> ConvertResult<String> {
    let name = call
        .single_arg()
        .and_then(Segment::as_string_literal)
        .ok_or_else(|| {
            ConvertError::malformed(Kind::Partial, "expected one string literal", segment)
        })?;

    Ok(format!("include \"{}\"", name))
}

/// `app('commerce').active?` -> `current_school.apps.commerce.active?`
fn convert_app(segment: &Segment, items: &[Segment]) -> ConvertResult<String> {
    let name = items
        .iter()
        .find_map(|item| item.as_call_named("app"))
        .and_then(Call::single_arg)
        .and_then(Segment::as_string_literal)
        .ok_or_else(|| {
            ConvertError::malformed(Kind::App, "`app` takes one string literal", segment)
        })?;

    Ok(format!("current_school.apps.{}.active?", name))
}
