use std::marker::PhantomData;

/// Visitation state of a node during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Color {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

impl Color {
    fn from_byte(b: u8) -> Self {
        match b {
            1 => Color::InProgress,
            2 => Color::Done,
            _ => Color::Unvisited,
        }
    }
}

/// A typed overlay on a node's scratch buffer.
///
/// Each algorithm defines one record and serializes it into the leading
/// `SIZE` bytes of the buffer; the store never learns the record's shape.
/// `set_parent` is a no-op for records that do not track the DFS tree.
pub(crate) trait ScratchRecord: Copy + Default {
    const SIZE: usize;

    fn load(bytes: &[u8]) -> Self;
    fn store(&self, bytes: &mut [u8]);

    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn set_parent(&mut self, parent: u32) {
        let _ = parent;
    }
}

/// Scratch for algorithms that only need visitation colors.
#[derive(Clone, Copy, Default)]
pub(crate) struct VisitRecord {
    color: Color,
}

impl ScratchRecord for VisitRecord {
    const SIZE: usize = 1;

    fn load(bytes: &[u8]) -> Self {
        Self {
            color: Color::from_byte(bytes[0]),
        }
    }

    fn store(&self, bytes: &mut [u8]) {
        bytes[0] = self.color as u8;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Marks "no DFS tree parent recorded".
pub(crate) const NO_PARENT: u32 = u32::MAX;

/// Scratch for algorithms that also walk back along the DFS tree.
#[derive(Clone, Copy)]
pub(crate) struct TraceRecord {
    pub(crate) parent: u32,
    color: Color,
}

impl Default for TraceRecord {
    fn default() -> Self {
        Self {
            parent: NO_PARENT,
            color: Color::Unvisited,
        }
    }
}

impl ScratchRecord for TraceRecord {
    const SIZE: usize = 5;

    fn load(bytes: &[u8]) -> Self {
        Self {
            parent: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            color: Color::from_byte(bytes[4]),
        }
    }

    fn store(&self, bytes: &mut [u8]) {
        bytes[..4].copy_from_slice(&self.parent.to_le_bytes());
        bytes[4] = self.color as u8;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_parent(&mut self, parent: u32) {
        self.parent = parent;
    }
}

/// Post-monomorphization check that a record fits a graph's scratch buffer.
/// Referencing `CHECK` fails the build whenever an algorithm instantiates a
/// record larger than `CAP`, so undersized scratch can never reach a walk.
pub(crate) struct ScratchFits<R, const CAP: usize>(PhantomData<R>);

impl<R: ScratchRecord, const CAP: usize> ScratchFits<R, CAP> {
    pub(crate) const CHECK: () = assert!(
        R::SIZE <= CAP,
        "scratch record does not fit; raise the graph's CAP parameter"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_survive_a_store_load_cycle() {
        let mut buf = [0u8; 8];
        let mut rec = TraceRecord::default();
        rec.set_color(Color::InProgress);
        rec.set_parent(3);
        rec.store(&mut buf);
        let back = TraceRecord::load(&buf);
        assert_eq!(back.color(), Color::InProgress);
        assert_eq!(back.parent, 3);
    }

    #[test]
    fn defaults_are_unvisited_without_parent() {
        assert_eq!(VisitRecord::default().color(), Color::Unvisited);
        let rec = TraceRecord::default();
        assert_eq!(rec.color(), Color::Unvisited);
        assert_eq!(rec.parent, NO_PARENT);
    }

    #[test]
    fn record_sizes_fit_the_default_capacity() {
        assert!(VisitRecord::SIZE <= 8);
        assert!(TraceRecord::SIZE <= 8);
    }
}
