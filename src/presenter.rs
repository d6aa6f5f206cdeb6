use std::fmt::Write;

use crate::models::OddsMatrix;

/// One table row: the boy's name plus one cell per girl
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    pub label: String,
    pub cells: Vec<f64>,
}

/// Structured rows for an odds matrix, one per boy in declared order
///
/// Cell order follows girl declared order.
pub fn matrix_rows(matrix: &OddsMatrix) -> Vec<MatrixRow> {
    matrix
        .boys()
        .iter()
        .enumerate()
        .map(|(boy_idx, boy)| MatrixRow {
            label: boy.clone(),
            cells: matrix.row(boy_idx).to_vec(),
        })
        .collect()
}

/// Render an odds matrix as an aligned text table
///
/// Header row holds the girl names behind a blank-labeled column for the
/// boy names. Cells carry the raw floating-point values; no rounding or
/// percentage formatting is applied.
pub fn render_table(matrix: &OddsMatrix) -> String {
    let rows = matrix_rows(matrix);

    // Column-major cell text, header line first.
    let mut columns: Vec<Vec<String>> = Vec::with_capacity(matrix.girls().len() + 1);
    let mut label_column = vec![String::new()];
    label_column.extend(rows.iter().map(|row| row.label.clone()));
    columns.push(label_column);

    for (girl_idx, girl) in matrix.girls().iter().enumerate() {
        let mut column = vec![girl.clone()];
        column.extend(rows.iter().map(|row| row.cells[girl_idx].to_string()));
        columns.push(column);
    }

    let widths: Vec<usize> = columns
        .iter()
        .map(|column| column.iter().map(String::len).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for line in 0..rows.len() + 1 {
        for (col_idx, column) in columns.iter().enumerate() {
            if col_idx > 0 {
                out.push_str("  ");
            }
            let _ = write!(out, "{:<width$}", column[line], width = widths[col_idx]);
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out
}
