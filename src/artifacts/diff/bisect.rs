//! Myers' middle-snake bisection
//!
//! Walks the edit graph from both corners at once, one edit distance per
//! round, until a forward path and a reverse path overlap. The overlap point
//! lies on an optimal path, so the two halves are diffed independently and
//! concatenated. The search checks the deadline at the start of every round and
//! gives up with a plain delete/insert pair once it has passed.

use crate::artifacts::diff::deadline::Deadline;
use crate::artifacts::diff::differ::Differ;
use crate::artifacts::diff::edit::{Edit, Operation};
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct Bisect<'d> {
    differ: &'d Differ,
    a: &'d [char],
    b: &'d [char],
    deadline: Deadline,
}

impl Bisect<'_> {
    /// Produce the edit script for `a` -> `b`
    pub fn run(&self) -> Vec<Edit> {
        match self.find_middle_snake() {
            Some((x, y)) => self.split(x, y),
            None => [
                Edit::from_chars(Operation::Delete, self.a),
                Edit::from_chars(Operation::Insert, self.b),
            ]
            .into_iter()
            .filter(|edit| !edit.is_empty())
            .collect(),
        }
    }

    /// Point where the forward and reverse frontiers first overlap, or `None`
    /// if the deadline ran out (or no overlap exists)
    fn find_middle_snake(&self) -> Option<(usize, usize)> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let max_d = (n + m + 1) / 2;
        let v_offset = max_d;
        let v_length = 2 * max_d;

        // Two spare slots keep the k+1 read of the first round in bounds for
        // tiny inputs; they stay at -1 and never satisfy an overlap check.
        let mut v1 = vec![-1isize; (v_length + 2) as usize];
        let mut v2 = vec![-1isize; (v_length + 2) as usize];
        v1[(v_offset + 1) as usize] = 0;
        v2[(v_offset + 1) as usize] = 0;

        let delta = n - m;
        // With an odd delta the forward path detects the collision, otherwise
        // the reverse path does.
        let front = delta % 2 != 0;

        // Offsets for the start and end of k loops; they prevent mapping
        // diagonals that run off the edit grid.
        let (mut k1start, mut k1end) = (0, 0);
        let (mut k2start, mut k2end) = (0, 0);

        for d in 0..max_d {
            if self.deadline.is_expired() {
                log::debug!("bisect deadline reached at edit distance {d}");
                break;
            }

            // Walk the front path one step.
            let mut k1 = -d + k1start;
            while k1 <= d - k1end {
                let k1_offset = (v_offset + k1) as usize;
                let mut x1 = if k1 == -d || (k1 != d && v1[k1_offset - 1] < v1[k1_offset + 1]) {
                    v1[k1_offset + 1]
                } else {
                    v1[k1_offset - 1] + 1
                };
                let mut y1 = x1 - k1;
                while x1 < n && y1 < m && self.a[x1 as usize] == self.b[y1 as usize] {
                    x1 += 1;
                    y1 += 1;
                }
                v1[k1_offset] = x1;

                if x1 > n {
                    // Ran off the right of the graph.
                    k1end += 2;
                } else if y1 > m {
                    // Ran off the bottom of the graph.
                    k1start += 2;
                } else if front {
                    let k2_offset = v_offset + delta - k1;
                    if (0..v_length).contains(&k2_offset) && v2[k2_offset as usize] != -1 {
                        // Mirror x2 onto the top-left coordinate system.
                        let x2 = n - v2[k2_offset as usize];
                        if x1 >= x2 {
                            return Some((x1 as usize, y1 as usize));
                        }
                    }
                }
                k1 += 2;
            }

            // Walk the reverse path one step.
            let mut k2 = -d + k2start;
            while k2 <= d - k2end {
                let k2_offset = (v_offset + k2) as usize;
                let mut x2 = if k2 == -d || (k2 != d && v2[k2_offset - 1] < v2[k2_offset + 1]) {
                    v2[k2_offset + 1]
                } else {
                    v2[k2_offset - 1] + 1
                };
                let mut y2 = x2 - k2;
                while x2 < n
                    && y2 < m
                    && self.a[(n - x2 - 1) as usize] == self.b[(m - y2 - 1) as usize]
                {
                    x2 += 1;
                    y2 += 1;
                }
                v2[k2_offset] = x2;

                if x2 > n {
                    // Ran off the left of the graph.
                    k2end += 2;
                } else if y2 > m {
                    // Ran off the top of the graph.
                    k2start += 2;
                } else if !front {
                    let k1_offset = v_offset + delta - k2;
                    if (0..v_length).contains(&k1_offset) && v1[k1_offset as usize] != -1 {
                        let x1 = v1[k1_offset as usize];
                        let y1 = v_offset + x1 - k1_offset;
                        // Mirror x2 onto the top-left coordinate system.
                        if x1 >= n - x2 {
                            return Some((x1 as usize, y1 as usize));
                        }
                    }
                }
                k2 += 2;
            }
        }

        None
    }

    /// Diff both halves around `(x, y)` and join the results
    fn split(&self, x: usize, y: usize) -> Vec<Edit> {
        let (a1, a2) = self.a.split_at(x);
        let (b1, b2) = self.b.split_at(y);

        let mut diffs = self.differ.diff_chars(a1, b1, false, self.deadline);
        diffs.extend(self.differ.diff_chars(a2, b2, false, self.deadline));
        diffs
    }
}
