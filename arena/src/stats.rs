use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Final results of a simulation, ready to be reported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub p1_name: String,
    pub p2_name: String,
    pub p1_wins: u64,
    pub p2_wins: u64,
    pub ties: u64,
    pub rounds: u64,
    pub p1_win_pct: f64,
    pub p2_win_pct: f64,
    pub tie_pct: f64,
}

impl MatchStats {
    pub fn total(&self) -> u64 {
        self.p1_wins + self.p2_wins + self.ties
    }

    fn rows(&self) -> [[String; 3]; 3] {
        [
            [
                self.p1_name.clone(),
                format!("{:.2}", self.p1_win_pct),
                self.p1_wins.to_string(),
            ],
            [
                self.p2_name.clone(),
                format!("{:.2}", self.p2_win_pct),
                self.p2_wins.to_string(),
            ],
            [
                "Tie".to_string(),
                format!("{:.2}", self.tie_pct),
                self.ties.to_string(),
            ],
        ]
    }
}

/// Renders the stats as a bordered table with a totals footer.
impl Display for MatchStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let header = [
            "NAME".to_string(),
            "WIN PERCENTAGE".to_string(),
            "WINS".to_string(),
        ];
        let footer = [String::new(), "TOTAL".to_string(), self.total().to_string()];
        let rows = self.rows();

        let mut widths = [0usize; 3];
        for row in std::iter::once(&header).chain(&rows).chain(std::iter::once(&footer)) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_border(f, &widths)?;
        write_row(f, &header, &widths, &[Align::Center; 3])?;
        write_border(f, &widths)?;
        for row in rows.iter() {
            write_row(f, row, &widths, &COLUMN_ALIGN)?;
        }
        write_border(f, &widths)?;
        write_row(f, &footer, &widths, &COLUMN_ALIGN)?;
        write_border(f, &widths)
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// Alignment of body and footer cells. Headers are centered.
const COLUMN_ALIGN: [Align; 3] = [Align::Left, Align::Right, Align::Right];

fn write_border(f: &mut Formatter<'_>, widths: &[usize; 3]) -> fmt::Result {
    write!(f, "+")?;
    for width in widths {
        write!(f, "{}+", "-".repeat(width + 2))?;
    }
    writeln!(f)
}

fn write_row(
    f: &mut Formatter<'_>,
    cells: &[String; 3],
    widths: &[usize; 3],
    aligns: &[Align; 3],
) -> fmt::Result {
    write!(f, "|")?;
    for ((cell, &width), align) in cells.iter().zip(widths).zip(aligns) {
        match align {
            Align::Left => write!(f, " {:<width$} |", cell, width = width)?,
            Align::Center => write!(f, " {:^width$} |", cell, width = width)?,
            Align::Right => write!(f, " {:>width$} |", cell, width = width)?,
        }
    }
    writeln!(f)
}
