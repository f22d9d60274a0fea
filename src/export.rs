// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tab-separated export of table listings

use crate::kubernetes::TableResult;
use bytes::Bytes;
use futures::stream::{self, Stream};

const DELIMITER: char = '\t';
const LINE_TERMINATOR: char = '\n';

/// Stream a table as TSV, one chunk per line: the header first, then each row.
///
/// Nothing is rendered ahead of the consumer, so dropping the stream stops the
/// export after the row currently being written.
pub fn export(table: TableResult) -> impl Stream<Item = Bytes> + Send + 'static {
    let header = encode_line(table.columns.iter().map(|c| c.name.as_str()));
    let rows = table
        .rows
        .into_iter()
        .map(|row| encode_line(row.iter().map(String::as_str)));

    stream::iter(std::iter::once(header).chain(rows))
}

/// File name for a download of the given request path, e.g.
/// `/clusters/local/nodes` becomes `clusters_local_nodes.tsv`
pub fn download_filename(path: &str) -> String {
    format!("{}.tsv", path.trim_matches('/').replace('/', "_"))
}

fn encode_line<'a>(cells: impl Iterator<Item = &'a str>) -> Bytes {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        push_cell(&mut line, cell);
    }
    line.push(LINE_TERMINATOR);
    Bytes::from(line)
}

/// Quote only cells that would otherwise break the line structure
fn push_cell(line: &mut String, cell: &str) {
    if cell.contains([DELIMITER, '"', '\r', LINE_TERMINATOR]) {
        line.push('"');
        line.push_str(&cell.replace('"', "\"\""));
        line.push('"');
    } else {
        line.push_str(cell);
    }
}
