use fundrisk_core::ColumnNames;
use fundrisk_model::Workbook;

/// What a sheet can be used for, judged by its headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRole {
    /// Has the fund name and total asset columns.
    Reference,
    /// Has the instrument and NPV columns.
    Fund,
    Other,
}

impl SheetRole {
    pub fn as_str(self) -> &'static str {
        match self {
            SheetRole::Reference => "reference",
            SheetRole::Fund => "fund",
            SheetRole::Other => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInfo {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    pub role: SheetRole,
}

pub fn describe_sheets(workbook: &Workbook, columns: &ColumnNames) -> Vec<SheetInfo> {
    workbook
        .iter()
        .map(|(name, table)| {
            let role = if table.has_column(&columns.fund) && table.has_column(&columns.assets) {
                SheetRole::Reference
            } else if table.has_column(&columns.instrument)
                && table.has_column(&columns.net_present_value)
            {
                SheetRole::Fund
            } else {
                SheetRole::Other
            };
            SheetInfo {
                name: name.to_string(),
                rows: table.height(),
                columns: table.width(),
                role,
            }
        })
        .collect()
}
