use itertools::Itertools;
use regex::Regex;

use crate::error::{Error, Result};
use crate::universe::Universe;

/// Decode a Run-Length-Encoded pattern into a rectangular matrix of
/// cell characters, `o` for live and `b` for dead. Rows shorter than
/// the declared width are padded with `b`.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn decode(src: impl AsRef<str>) -> Result<Vec<Vec<char>>> {
  let header_re = Regex::new(r"^x = (\d+), y = (\d+)\b").unwrap();

  let mut lines = src
    .as_ref()
    .lines()
    .skip_while(|line| line.trim_start().starts_with('#'));

  let header = lines.next().ok_or_else(|| malformed("missing header line"))?;
  let caps = header_re
    .captures(header.trim_start())
    .ok_or_else(|| malformed("invalid header line"))?;
  let width: usize = caps[1].parse().map_err(|_| malformed("pattern width overflows"))?;
  let height: usize = caps[2].parse().map_err(|_| malformed("pattern height overflows"))?;
  if width == 0 || height == 0 {
    return Err(malformed("pattern dimensions must be positive"));
  }

  let mut matrix = vec![vec!['b'; width]; height];
  let mut x = 0;
  let mut y = 0;
  let mut num: Option<usize> = None;
  let mut terminated = false;

  'body: for line in lines {
    for ch in line.chars() {
      match ch {
        '!' => {
          terminated = true;
          break 'body;
        }
        '0'..='9' => {
          let digit = ch as usize - '0' as usize;
          num = Some(num.take().unwrap_or(0) * 10 + digit);
        }
        'b' | 'o' => {
          let run = num.take().unwrap_or(1);
          if y >= height || x + run > width {
            return Err(malformed("run exceeds the declared pattern extent"));
          }
          if ch == 'o' {
            for cell in &mut matrix[y][x..x + run] {
              *cell = 'o';
            }
          }
          x += run;
        }
        '$' => {
          let run = num.take().unwrap_or(1);
          y += run;
          x = 0;
          if y > height {
            return Err(malformed("more rows than the header declares"));
          }
        }
        c if c.is_whitespace() => {
          if num.is_some() {
            return Err(malformed("run count split by whitespace"));
          }
        }
        other => {
          return Err(malformed(&format!("unexpected character {:?}", other)));
        }
      }
    }
  }

  if !terminated {
    return Err(malformed("missing '!' terminator"));
  }

  Ok(matrix)
}

/// Decode `src` and overlay it into `uni` at `pad`.
pub fn read_into(src: impl AsRef<str>, uni: &mut Universe, pad: usize) -> Result<()> {
  let matrix = decode(src)?;
  uni.insert_from_rle(&matrix, pad)
}

/// Encode the bounding box of the live cells as an RLE string, one RLE
/// row per grid row. Blank rows collapse into `$` counts and trailing
/// dead runs are omitted.
pub fn write(uni: &Universe) -> String {
  let grid = uni.grid();
  let live: Vec<(usize, usize)> = grid.live_cells().collect();

  if live.is_empty() {
    return format!("x = 0, y = 0, rule = {}\n!\n", uni.rule());
  }

  let row0 = live.iter().map(|&(row, _)| row).min().unwrap();
  let row1 = live.iter().map(|&(row, _)| row).max().unwrap();
  let col0 = live.iter().map(|&(_, col)| col).min().unwrap();
  let col1 = live.iter().map(|&(_, col)| col).max().unwrap();

  let mut output = format!(
    "x = {}, y = {}, rule = {}\n",
    col1 - col0 + 1,
    row1 - row0 + 1,
    uni.rule()
  );

  let mut pending_rows = 0;
  for row in row0..=row1 {
    let cells = (col0..=col1).map(|col| grid.at(row, col));
    let groups = cells.group_by(|cell| cell.is_alive());
    let mut runs: Vec<(bool, usize)> = (&groups)
      .into_iter()
      .map(|(alive, run)| (alive, run.count()))
      .collect();

    if let Some(&(false, _)) = runs.last() {
      runs.pop();
    }
    if runs.is_empty() {
      pending_rows += 1;
      continue;
    }

    if pending_rows > 0 {
      push_unit(&mut output, pending_rows, '$');
    }
    pending_rows = 1;
    for (alive, run) in runs {
      push_unit(&mut output, run, if alive { 'o' } else { 'b' });
    }
  }

  output.push('!');
  output.push('\n');
  output
}

fn push_unit(output: &mut String, num: usize, unit: char) {
  let buf = if num == 1 {
    unit.to_string()
  } else {
    format!("{}{}", num, unit)
  };

  if output.len() - output.rfind('\n').unwrap() + buf.len() > 71 {
    output.push('\n');
  }

  output.push_str(&buf);
}

fn malformed(msg: &str) -> Error {
  Error::MalformedPattern(msg.to_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_glider() {
    let src = "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n";
    assert_eq!(
      vec![
        vec!['b', 'o', 'b'],
        vec!['b', 'b', 'o'],
        vec!['o', 'o', 'o'],
      ],
      decode(src).unwrap()
    );
  }

  #[test]
  fn decode_skips_comment_lines() {
    let src = "#N Glider\n#C the smallest spaceship\nx = 3, y = 3\nbo$2bo$3o!";
    assert_eq!(3, decode(src).unwrap().len());
  }

  #[test]
  fn decode_pads_short_rows() {
    let src = "x = 4, y = 3\no$2o$o!";
    assert_eq!(
      vec![
        vec!['o', 'b', 'b', 'b'],
        vec!['o', 'o', 'b', 'b'],
        vec!['o', 'b', 'b', 'b'],
      ],
      decode(src).unwrap()
    );
  }

  #[test]
  fn decode_counted_row_terminators() {
    let src = "x = 2, y = 4\n2o3$2o!";
    let matrix = decode(src).unwrap();
    assert_eq!(vec!['o', 'o'], matrix[0]);
    assert_eq!(vec!['b', 'b'], matrix[1]);
    assert_eq!(vec!['b', 'b'], matrix[2]);
    assert_eq!(vec!['o', 'o'], matrix[3]);
  }

  #[test]
  fn decode_accepts_newlines_between_units() {
    let src = "x = 3, y = 2\n2ob$\n3o!";
    let matrix = decode(src).unwrap();
    assert_eq!(vec!['o', 'o', 'b'], matrix[0]);
    assert_eq!(vec!['o', 'o', 'o'], matrix[1]);
  }

  #[test]
  fn decode_requires_a_header() {
    assert!(decode("bo$2bo$3o!").is_err());
  }

  #[test]
  fn decode_rejects_a_missing_terminator() {
    assert!(decode("x = 2, y = 1\n2o").is_err());
  }

  #[test]
  fn decode_rejects_garbage_characters() {
    assert!(decode("x = 2, y = 1\n2z!").is_err());
  }

  #[test]
  fn decode_rejects_rows_past_the_declared_extent() {
    assert!(decode("x = 2, y = 1\n2o$2o!").is_err());
    assert!(decode("x = 2, y = 1\n3o!").is_err());
  }

  #[test]
  fn write_block() {
    let mut uni = Universe::new(6).unwrap();
    uni
      .insert_cells(&[(0, 0), (0, 1), (1, 0), (1, 1)], (2, 2))
      .unwrap();
    assert_eq!("x = 2, y = 2, rule = B3/S23\n2o$2o!\n", write(&uni));
  }

  #[test]
  fn write_collapses_blank_rows_and_trailing_dead_cells() {
    let mut uni = Universe::new(5).unwrap();
    uni.insert_cells(&[(0, 0), (2, 1)], (0, 0)).unwrap();
    assert_eq!("x = 2, y = 3, rule = B3/S23\no2$bo!\n", write(&uni));
  }

  #[test]
  fn write_empty_grid() {
    let uni = Universe::new(4).unwrap();
    assert_eq!("x = 0, y = 0, rule = B3/S23\n!\n", write(&uni));
  }

  #[test]
  fn decode_recovers_what_write_produced() {
    let mut uni = Universe::new(6).unwrap();
    uni.insert_blinker((1, 1)).unwrap();

    let encoded = write(&uni);
    assert_eq!("x = 1, y = 3, rule = B3/S23\no$o$o!\n", encoded);
    assert_eq!(
      vec![vec!['o'], vec!['o'], vec!['o']],
      decode(encoded).unwrap()
    );
  }

  #[test]
  fn read_into_seeds_the_universe() {
    let mut uni = Universe::new(8).unwrap();
    read_into("x = 3, y = 3\nbo$2bo$3o!", &mut uni, 1).unwrap();
    assert_eq!(5, uni.grid().population());
  }
}
