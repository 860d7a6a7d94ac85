//! # PDF Generation Module
//!
//! Renders a customer budget to PDF using Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via string replacement before compilation
//! - Fonts come from `typst-assets`, nothing is read from disk
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use inox_core::pdf::render_budget_pdf;
//! use inox_core::pricing::{Budget, PricingInput, PricingParams};
//!
//! let mut budget = Budget::new();
//! budget.add(PricingInput::Weighted {
//!     description: "Handrail".to_string(),
//!     weight_kg: 12.0,
//!     quantity: 2,
//! }, &PricingParams::default()).unwrap();
//!
//! let pdf_bytes = render_budget_pdf(&budget, "ACME Ltda").unwrap();
//! std::fs::write("budget.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::errors::{CalcError, CalcResult};
use crate::pricing::Budget;

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    main: Source,
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts: Vec<Font> = typst_assets::fonts()
            .flat_map(|data| Font::iter(Bytes::new(data.to_vec())))
            .collect();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// PDF Template
// ============================================================================

const BUDGET_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2cm, bottom: 2cm, left: 2cm, right: 2cm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[PS INOX Structural Pre-Sizing]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr),
      align(left)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt)

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Budget]
    #v(4pt)
    #text(size: 13pt)[{{CUSTOMER}}]
  ]
]

#v(12pt)

#table(
  columns: (1fr, auto, auto, auto, auto),
  align: (left, right, right, right, right),
  stroke: 0.5pt + gray,
  table.header(
    [*Description*], [*Qty*], [*Weight (kg)*], [*Unit price*], [*Total*],
  ),
{{ROWS}}
)

#v(8pt)

#align(right)[
  #grid(
    columns: (auto, auto),
    gutter: 8pt,
    [Total weight:], [*{{TOTAL_WEIGHT}} kg*],
    [Total:], [*{{TOTAL}}*],
  )
]

#v(16pt)

#text(size: 9pt, fill: gray)[
  Pre-sizing estimate. Member sizes must be confirmed by a licensed engineer before fabrication.
]
"##;

/// Render a budget to PDF bytes.
///
/// # Arguments
///
/// * `budget` - Lines to print, in order
/// * `customer` - Name printed in the title block
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF document
/// * `Err(CalcError::InvalidInput)` - Empty budget
/// * `Err(CalcError::Internal)` - Typst compilation or PDF export failed
pub fn render_budget_pdf(budget: &Budget, customer: &str) -> CalcResult<Vec<u8>> {
    if budget.is_empty() {
        return Err(CalcError::invalid_input("budget", "[]", "Nothing to print"));
    }

    let source = budget_source(budget, customer, &Utc::now().format("%Y-%m-%d").to_string());
    let world = PdfWorld::new(source);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("Typst compilation failed: {}", error_msgs.join("; ")),
        }
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("PDF rendering failed: {}", error_msgs.join("; ")),
        }
    })?;

    tracing::info!(lines = budget.len(), bytes = pdf_bytes.len(), "budget PDF rendered");
    Ok(pdf_bytes)
}

/// Fill the budget template. User text goes in last so it is never
/// scanned for placeholders.
fn budget_source(budget: &Budget, customer: &str, date: &str) -> String {
    let rows = budget
        .items()
        .iter()
        .map(|item| {
            format!(
                "  [{}], [{}], [{:.1}], [{:.2}], [{:.2}],",
                escape_typst(&item.description),
                item.quantity,
                item.total_weight_kg(),
                item.unit_price,
                item.computed_price
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    BUDGET_TEMPLATE
        .replace("{{DATE}}", date)
        .replace("{{TOTAL_WEIGHT}}", &format!("{:.1}", budget.total_weight_kg()))
        .replace("{{TOTAL}}", &format!("{:.2}", budget.total()))
        .replace("{{CUSTOMER}}", &escape_typst(customer))
        .replace("{{ROWS}}", &rows)
}

/// Escape markup characters in user text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            '/' => "\\/".to_string(),
            '{' => "\\{".to_string(),
            '}' => "\\}".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
