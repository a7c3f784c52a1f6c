use std::fmt::Display;
use std::str::FromStr;

use super::connection::{ConnectionMatrix, HEADER_SIZE, MAGIC, VERSION};
use super::LoadError;

impl ConnectionMatrix {
    /// Parse a text matrix.
    ///
    /// Two layouts are accepted, told apart by the first data line:
    /// - MeCab `matrix.def`: header `num_right num_left`, then one
    ///   `right_id left_id cost` triple per line. Missing cells stay 0.
    /// - Dense: header `num_ids` (or `num_right num_left`), then every cost
    ///   on its own line in row-major order.
    ///
    /// Errors carry the 1-based line number.
    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .peekable();

        let (_, header) = lines
            .next()
            .ok_or_else(|| LoadError::Parse("empty matrix file".to_string()))?;
        let num_ids: u16 = match header.split_whitespace().collect::<Vec<_>>()[..] {
            [n] => field(n, "num_ids", 1)?,
            [r, l] => {
                let (r, l): (u16, u16) = (field(r, "num_right", 1)?, field(l, "num_left", 1)?);
                if r != l {
                    return Err(LoadError::Parse(format!(
                        "line 1: matrix must be square, got {r}x{l}"
                    )));
                }
                r
            }
            _ => {
                return Err(LoadError::Parse(format!(
                    "line 1: bad header `{header}`"
                )))
            }
        };

        let triples = lines
            .peek()
            .is_some_and(|(_, line)| line.split_whitespace().count() == 3);
        let mut matrix = Self::zeroed(num_ids);

        if triples {
            for (no, line) in lines {
                let [r, l, c] = line.split_whitespace().collect::<Vec<_>>()[..] else {
                    return Err(LoadError::Parse(format!(
                        "line {no}: expected `right left cost`"
                    )));
                };
                let right_id: u16 = field(r, "right_id", no)?;
                let left_id: u16 = field(l, "left_id", no)?;
                if !matrix.contains_id(right_id) || !matrix.contains_id(left_id) {
                    return Err(LoadError::Parse(format!(
                        "line {no}: id pair ({right_id}, {left_id}) outside {num_ids} ids"
                    )));
                }
                matrix.set(right_id, left_id, field(c, "cost", no)?);
            }
            return Ok(matrix);
        }

        let expected = num_ids as usize * num_ids as usize;
        let mut costs = Vec::with_capacity(expected);
        for (no, line) in lines {
            costs.push(field::<i16>(line, "cost", no)?);
        }
        if costs.len() != expected {
            return Err(LoadError::Parse(format!(
                "expected {expected} costs, got {}",
                costs.len()
            )));
        }
        matrix.costs = costs;
        Ok(matrix)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LoadError> {
        if data.len() < HEADER_SIZE {
            return Err(LoadError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(LoadError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(LoadError::UnsupportedVersion(data[4]));
        }
        let num_ids = u16::from_le_bytes([data[5], data[6]]);
        let expected_bytes = num_ids as usize * num_ids as usize * 2;
        let actual_bytes = data.len() - HEADER_SIZE;
        if actual_bytes != expected_bytes {
            return Err(LoadError::Corrupt(format!(
                "expected {expected_bytes} bytes of cost data, got {actual_bytes}",
            )));
        }
        let costs: Vec<i16> = data[HEADER_SIZE..]
            .chunks_exact(2)
            .map(|chunk| i16::from_le_bytes([chunk[0], chunk[1]]))
            .collect();
        Ok(Self { num_ids, costs })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_SIZE + self.costs.len() * 2);
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&self.num_ids.to_le_bytes());
        for &cost in &self.costs {
            buf.extend_from_slice(&cost.to_le_bytes());
        }
        buf
    }
}

fn field<T>(raw: &str, name: &str, line: usize) -> Result<T, LoadError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|e| LoadError::Parse(format!("line {line}: invalid {name} `{raw}`: {e}")))
}
