//! Character-find targets for `f`, `F`, `t` and `T`.

/// Direction and landing rule of a character find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindKind {
    /// `f`: forward, land on the target.
    Forward,
    /// `F`: backward, land on the target.
    Backward,
    /// `t`: forward, land just before the target.
    ForwardBefore,
    /// `T`: backward, land just after the target.
    BackwardAfter,
}

impl FindKind {
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'f' => Some(FindKind::Forward),
            b'F' => Some(FindKind::Backward),
            b't' => Some(FindKind::ForwardBefore),
            b'T' => Some(FindKind::BackwardAfter),
            _ => None,
        }
    }

    pub fn is_forward(self) -> bool {
        matches!(self, FindKind::Forward | FindKind::ForwardBefore)
    }
}

/// Landing position for the `count`-th occurrence of `target`.
///
/// Forward finds scan from `cursor + 1`, backward finds from `cursor - 1`.
/// Returns None if there are fewer than `count` occurrences.
pub fn find_char(
    text: &[u8],
    cursor: usize,
    kind: FindKind,
    target: u8,
    count: usize,
) -> Option<usize> {
    let nth = count.max(1) - 1;
    let cursor = cursor.min(text.len());

    if kind.is_forward() {
        let pos = (cursor + 1..text.len())
            .filter(|&i| text[i] == target)
            .nth(nth)?;
        Some(match kind {
            FindKind::ForwardBefore => pos - 1,
            _ => pos,
        })
    } else {
        let pos = (0..cursor).rev().filter(|&i| text[i] == target).nth(nth)?;
        Some(match kind {
            FindKind::BackwardAfter => pos + 1,
            _ => pos,
        })
    }
}
