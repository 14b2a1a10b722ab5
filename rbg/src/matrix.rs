//! Parsing of the textual binary character matrix into a [`Graph`]. Species
//! are named `s1..sm`, characters `c1..cn`, 1-indexed, matching the order
//! they appear in the file.

use crate::{Color, Error, Graph, Kind};

/// A parsed `m` x `n` binary character matrix: row `i`, column `j` is `true` iff species `i` has
/// character `j` (a black edge between `s{i+1}` and `c{j+1}`).
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: Vec<Vec<bool>>,
    num_characters: usize,
}

impl Matrix {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .ok_or_else(|| Error::Parse("empty file: expected a header line `m n`".to_owned()))?;
        let mut header_tokens = header.split_whitespace();
        let m: usize = header_tokens
            .next()
            .ok_or_else(|| Error::Parse("missing species count".to_owned()))?
            .parse()
            .map_err(|_| Error::Parse("species count is not an integer".to_owned()))?;
        let n: usize = header_tokens
            .next()
            .ok_or_else(|| Error::Parse("missing character count".to_owned()))?
            .parse()
            .map_err(|_| Error::Parse("character count is not an integer".to_owned()))?;

        let mut rows = Vec::with_capacity(m);
        for row_idx in 0..m {
            let line = lines.next().ok_or_else(|| {
                Error::Parse(format!("expected {m} species rows, found {row_idx}"))
            })?;
            rows.push(parse_row(line, n, row_idx + 1)?);
        }

        Ok(Self {
            rows,
            num_characters: n,
        })
    }

    pub fn num_species(&self) -> usize {
        self.rows.len()
    }

    pub fn num_characters(&self) -> usize {
        self.num_characters
    }

    pub fn has(&self, species_idx: usize, character_idx: usize) -> bool {
        self.rows[species_idx][character_idx]
    }

    pub fn species_name(idx: usize) -> String {
        format!("s{}", idx + 1)
    }

    pub fn character_name(idx: usize) -> String {
        format!("c{}", idx + 1)
    }

    /// Builds the [`Graph`] this matrix describes: one black edge per `1` entry.
    pub fn to_graph(&self) -> Graph {
        let mut g = Graph::new();
        for i in 0..self.num_species() {
            g.add_vertex(Kind::Species, Self::species_name(i));
        }
        for j in 0..self.num_characters {
            g.add_vertex(Kind::Character, Self::character_name(j));
        }
        for i in 0..self.num_species() {
            for j in 0..self.num_characters {
                if self.has(i, j) {
                    g.add_edge(Color::Black, &Self::species_name(i), &Self::character_name(j))
                        .expect("freshly-added vertices are always valid edge endpoints");
                }
            }
        }
        g
    }
}

/// Parses one matrix row, accepting either whitespace-separated tokens (`1 0 1`) or a compact
/// run of digits (`101`); both are unambiguous to parse, so both are accepted.
fn parse_row(line: &str, n: usize, row_num: usize) -> Result<Vec<bool>, Error> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() == n {
        return tokens.iter().map(|t| parse_bit(t, row_num)).collect();
    }

    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.chars().count() != n {
        return Err(Error::Parse(format!(
            "row {row_num} has {} value(s), expected {n}",
            tokens.len().max(compact.chars().count())
        )));
    }
    compact
        .chars()
        .map(|c| parse_bit(&c.to_string(), row_num))
        .collect()
}

fn parse_bit(token: &str, row_num: usize) -> Result<bool, Error> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(Error::Parse(format!(
            "row {row_num}: expected `0` or `1`, found `{other}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_matrix() {
        let m = Matrix::parse("1 2\n1 1\n").unwrap();
        assert_eq!(m.num_species(), 1);
        assert_eq!(m.num_characters(), 2);
        assert!(m.has(0, 0));
        assert!(m.has(0, 1));
    }

    #[test]
    fn parses_compact_matrix() {
        let m = Matrix::parse("2 3\n101\n010\n").unwrap();
        assert!(m.has(0, 0));
        assert!(!m.has(0, 1));
        assert!(m.has(0, 2));
        assert!(!m.has(1, 0));
        assert!(m.has(1, 1));
    }

    #[test]
    fn rejects_wrong_row_width() {
        assert!(Matrix::parse("1 3\n1 1\n").is_err());
    }

    #[test]
    fn rejects_missing_rows() {
        assert!(Matrix::parse("2 1\n1\n").is_err());
    }

    #[test]
    fn to_graph_builds_expected_edges() {
        let m = Matrix::parse("1 2\n1 1\n").unwrap();
        let g = m.to_graph();
        assert!(g.is_universal("c1"));
        assert!(g.is_universal("c2"));
    }
}
