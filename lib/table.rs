//! Applies [`format_multiple_errors`] row-by-row across columns of a table and
//! typesets the result as a LaTeX `tabular`.
//!
//! A table is read from comma-separated text with a header row. Output columns
//! are described by [`Column`]s: either a column passed through untouched, or
//! a [`ColumnSpec`] naming a central value column and any number of error
//! columns (a single column for a symmetric error, or an `upper-lower` pair of
//! columns for an asymmetric one).
//!
//! [`format_multiple_errors`]: crate::format::format_multiple_errors

use std::{
    fs,
    path::Path,
    str::FromStr,
};
use itertools::Itertools;
use thiserror::Error;
use crate::{
    error::FormatError,
    format::{ format_multiple_errors, FormatOptions },
    mkerr,
    precision::LengthControl,
    term::{ ErrorTerm, Term },
};

mkerr!(
    ColumnSpecError : {
        Empty => "column specification is empty",
        EmptyName => "column specification contains an empty column name",
        BadPair => "asymmetric errors must be given as exactly two columns, upper-lower",
    }
);

#[derive(Debug, Error)]
pub enum TableError {
    #[error("table: missing column '{0}'")]
    MissingColumn(String),

    #[error("table: row {0} has {1} cells but the header has {2}")]
    RaggedRow(usize, usize, usize),

    #[error("table: table has no header row")]
    NoHeader,

    #[error("table: couldn't parse '{1}' in column '{0}' as a number")]
    NotANumber(String, String),

    #[error("table: got {0} headings for {1} columns")]
    HeadingCount(usize, usize),

    #[error("table: couldn't read file '{0}': {1}")]
    FileRead(String, std::io::Error),

    #[error("table: CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("table: bad column specification: {0}")]
    ColumnSpec(#[from] ColumnSpecError),

    #[error("table: row {0}: {1}")]
    Format(usize, FormatError),
}
pub type TableResult<T> = Result<T, TableError>;

/// A group of columns to be formatted into a single output column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Name of the column holding central values.
    pub value: String,

    /// Names of error columns, symmetric or `(upper, lower)`.
    pub errors: Vec<Term<String>>,

    /// Name of the output column; defaults to `value`.
    pub name: Option<String>,

    /// Options overriding the table-wide defaults for this column only.
    pub overrides: FormatOverrides,
}

/// Per-column changes to the table-wide [`FormatOptions`]. Unset fields keep
/// the table's value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOverrides {
    pub length_control: Option<LengthControl>,
    pub significant_figures: Option<u32>,
    pub abbreviate: Option<bool>,
    pub exponential: Option<bool>,
    pub latex: Option<bool>,
}

impl FormatOverrides {
    pub fn length_control(mut self, length_control: LengthControl) -> Self {
        self.length_control = Some(length_control);
        return self;
    }

    pub fn significant_figures(mut self, significant_figures: u32) -> Self {
        self.significant_figures = Some(significant_figures);
        return self;
    }

    pub fn abbreviate(mut self, abbreviate: bool) -> Self {
        self.abbreviate = Some(abbreviate);
        return self;
    }

    pub fn exponential(mut self, exponential: bool) -> Self {
        self.exponential = Some(exponential);
        return self;
    }

    pub fn latex(mut self, latex: bool) -> Self {
        self.latex = Some(latex);
        return self;
    }

    /// Lay `self` over `defaults`.
    pub fn apply(&self, defaults: &FormatOptions) -> FormatOptions {
        return FormatOptions {
            length_control:
                self.length_control.unwrap_or(defaults.length_control),
            significant_figures:
                self.significant_figures.unwrap_or(defaults.significant_figures),
            abbreviate: self.abbreviate.unwrap_or(defaults.abbreviate),
            exponential: self.exponential.unwrap_or(defaults.exponential),
            latex: self.latex.unwrap_or(defaults.latex),
        };
    }
}

impl ColumnSpec {
    pub fn new<S>(value: S) -> Self
    where S: Into<String>
    {
        return Self {
            value: value.into(),
            errors: Vec::new(),
            name: None,
            overrides: FormatOverrides::default(),
        };
    }

    /// Add a symmetric error column.
    pub fn error<S>(mut self, column: S) -> Self
    where S: Into<String>
    {
        self.errors.push(Term::Symmetric(column.into()));
        return self;
    }

    /// Add an asymmetric pair of error columns.
    pub fn asymmetric_error<S, T>(mut self, upper: S, lower: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.errors.push(Term::Asymmetric(upper.into(), lower.into()));
        return self;
    }

    pub fn name<S>(mut self, name: S) -> Self
    where S: Into<String>
    {
        self.name = Some(name.into());
        return self;
    }

    pub fn overrides(mut self, overrides: FormatOverrides) -> Self {
        self.overrides = overrides;
        return self;
    }

    /// Name of the output column.
    pub fn output_name(&self) -> &str {
        return self.name.as_deref().unwrap_or(&self.value);
    }
}

/// One column of output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Column {
    /// A column copied through as-is.
    Raw(String),

    /// A value and its errors, formatted together.
    Formatted(ColumnSpec),
}

impl From<ColumnSpec> for Column {
    fn from(spec: ColumnSpec) -> Self { Self::Formatted(spec) }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self { Self::Raw(name.to_string()) }
}

/// Parse `value[,error|,upper-lower]...`. A lone name is a raw column.
impl FromStr for Column {
    type Err = ColumnSpecError;

    fn from_str(s: &str) -> Result<Self, ColumnSpecError> {
        if s.is_empty() {
            return Err(ColumnSpecError::Empty);
        }
        let mut parts = s.split(',');
        let value: &str = parts.next().ok_or(ColumnSpecError::Empty)?;
        if value.is_empty() {
            return Err(ColumnSpecError::EmptyName);
        }
        let mut spec = ColumnSpec::new(value);
        let mut any_errors: bool = false;
        for error in parts {
            any_errors = true;
            let names: Vec<&str> = error.split('-').collect();
            if names.iter().any(|n| n.is_empty()) {
                return Err(ColumnSpecError::EmptyName);
            }
            spec = match names.as_slice() {
                [single] => spec.error(*single),
                [upper, lower] => spec.asymmetric_error(*upper, *lower),
                _ => { return Err(ColumnSpecError::BadPair); },
            };
        }
        return Ok(
            if any_errors { Self::Formatted(spec) } else { Self::Raw(value.to_string()) }
        );
    }
}

/// A table of text cells with named columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read CSV text whose first record is the header. Cells are trimmed and
    /// may be quoted.
    pub fn from_csv_str(s: &str) -> TableResult<Self> {
        let mut reader: csv::Reader<&[u8]>
            = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(s.as_bytes());
        let mut records = reader.records();
        let headers: Vec<String>
            = records.next()
            .ok_or(TableError::NoHeader)??
            .iter()
            .map(String::from)
            .collect();
        let mut rows: Vec<Vec<String>> = Vec::new();
        for (k, record) in records.enumerate() {
            let row: Vec<String> = record?.iter().map(String::from).collect();
            if row.len() != headers.len() {
                return Err(TableError::RaggedRow(k, row.len(), headers.len()));
            }
            rows.push(row);
        }
        return Ok(Self { headers, rows });
    }

    /// Read a CSV file.
    pub fn read_csv<P>(path: P) -> TableResult<Self>
    where P: AsRef<Path>
    {
        let path: &Path = path.as_ref();
        let text: String
            = fs::read_to_string(path)
            .map_err(|e| TableError::FileRead(path.display().to_string(), e))?;
        return Self::from_csv_str(&text);
    }

    fn column_index(&self, name: &str) -> TableResult<usize> {
        return self.headers.iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()));
    }

    /// Get the cells of a column by name.
    pub fn column(&self, name: &str) -> TableResult<Vec<&str>> {
        let k: usize = self.column_index(name)?;
        return Ok(self.rows.iter().map(|row| row[k].as_str()).collect());
    }

    /// Get the cells of a column by name, parsed as numbers.
    pub fn numeric_column(&self, name: &str) -> TableResult<Vec<f64>> {
        return self.column(name)?
            .into_iter()
            .map(|cell| {
                cell.parse::<f64>()
                    .map_err(|_| {
                        TableError::NotANumber(name.to_string(), cell.to_string())
                    })
            })
            .collect();
    }
}

/// Format one group of columns, returning a cell per row. In LaTeX mode each
/// cell is wrapped in `$`s.
pub fn format_column(table: &Table, spec: &ColumnSpec, defaults: &FormatOptions)
    -> TableResult<Vec<String>>
{
    let options: FormatOptions = spec.overrides.apply(defaults);
    let values: Vec<f64> = table.numeric_column(&spec.value)?;
    let error_columns: Vec<Term<Vec<f64>>>
        = spec.errors.iter()
        .map(|term| -> TableResult<Term<Vec<f64>>> {
            Ok(match term {
                Term::Symmetric(c) => Term::Symmetric(table.numeric_column(c)?),
                Term::Asymmetric(u, l) => Term::Asymmetric(
                    table.numeric_column(u)?,
                    table.numeric_column(l)?,
                ),
            })
        })
        .collect::<TableResult<Vec<_>>>()?;
    let mut cells: Vec<String> = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let errors: Vec<ErrorTerm>
            = error_columns.iter()
            .map(|col| col.as_ref().map(|c| c[row]))
            .collect();
        let cell: String
            = format_multiple_errors(value, &errors, &options)
            .map_err(|e| TableError::Format(row, e))?;
        cells.push(if options.latex { format!("${}$", cell) } else { cell });
    }
    return Ok(cells);
}

/// Column alignment in a typeset table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

impl Align {
    fn spec(&self) -> char {
        return match self {
            Self::Left => 'l',
            Self::Right => 'r',
        };
    }
}

/// The result of formatting a [`Table`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedTable {
    pub headers: Vec<String>,
    pub align: Vec<Align>,
    pub rows: Vec<Vec<String>>,
}

impl FormattedTable {
    /// Typeset as a booktabs-style LaTeX `tabular`. If given, `headings`
    /// replace the column names and must match them in number.
    pub fn to_latex(&self, headings: Option<&[String]>) -> TableResult<String> {
        let headers: &[String]
            = match headings {
                Some(h) if h.len() != self.headers.len()
                    => { return Err(TableError::HeadingCount(h.len(), self.headers.len())); },
                Some(h) => h,
                None => &self.headers,
            };
        let mut out: String = String::new();
        out += &format!(
            "\\begin{{tabular}}{{{}}}\n",
            self.align.iter().map(Align::spec).collect::<String>(),
        );
        out += "\\toprule\n";
        out += &format!("{} \\\\\n", headers.iter().join(" & "));
        out += "\\midrule\n";
        for row in self.rows.iter() {
            out += &format!("{} \\\\\n", row.iter().join(" & "));
        }
        out += "\\bottomrule\n";
        out += "\\end{tabular}\n";
        return Ok(out);
    }
}

/// Format every requested column of `table`. Raw columns are right-aligned if
/// every cell is a number; formatted columns are left-aligned.
pub fn format_table(table: &Table, columns: &[Column], defaults: &FormatOptions)
    -> TableResult<FormattedTable>
{
    let mut headers: Vec<String> = Vec::with_capacity(columns.len());
    let mut align: Vec<Align> = Vec::with_capacity(columns.len());
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(columns.len());
    for column in columns.iter() {
        match column {
            Column::Raw(name) => {
                let raw: Vec<String>
                    = table.column(name)?
                    .into_iter()
                    .map(String::from)
                    .collect();
                let numeric: bool = raw.iter().all(|c| c.parse::<f64>().is_ok());
                headers.push(name.clone());
                align.push(if numeric { Align::Right } else { Align::Left });
                cells.push(raw);
            },
            Column::Formatted(spec) => {
                headers.push(spec.output_name().to_string());
                align.push(Align::Left);
                cells.push(format_column(table, spec, defaults)?);
            },
        }
    }
    let rows: Vec<Vec<String>>
        = (0..table.rows.len())
        .map(|k| cells.iter().map(|col| col[k].clone()).collect())
        .collect();
    log::debug!("formatted {} columns over {} rows", headers.len(), rows.len());
    return Ok(FormattedTable { headers, align, rows });
}
