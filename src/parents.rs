use crate::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Link {
    Unset,
    Root,
    From(Cell),
}

/// Back-pointers recording, for every cell, the cell it was first reached from. Each entry
/// is written at most once, so the links always form a tree rooted at the search source.
#[derive(Clone, Debug)]
pub struct ParentMap {
    dimension: usize,
    root: Cell,
    links: Vec<Link>,
}

impl ParentMap {
    pub fn new(dimension: usize, root: Cell) -> ParentMap {
        let mut links = vec![Link::Unset; dimension * dimension];
        links[root.row * dimension + root.col] = Link::Root;
        ParentMap {
            dimension,
            root,
            links,
        }
    }

    fn ix(&self, cell: Cell) -> usize {
        cell.row * self.dimension + cell.col
    }

    pub fn root(&self) -> Cell {
        self.root
    }

    /// Records `parent` for `cell` unless the cell already has one (or is the root).
    /// Returns whether the write happened.
    pub fn record(&mut self, cell: Cell, parent: Cell) -> bool {
        let ix = self.ix(cell);
        match self.links[ix] {
            Link::Unset => {
                self.links[ix] = Link::From(parent);
                true
            }
            Link::Root | Link::From(_) => false,
        }
    }

    pub fn is_assigned(&self, cell: Cell) -> bool {
        self.links[self.ix(cell)] != Link::Unset
    }

    pub fn parent(&self, cell: Cell) -> Option<Cell> {
        match self.links[self.ix(cell)] {
            Link::From(parent) => Some(parent),
            Link::Unset | Link::Root => None,
        }
    }

    /// The chain `from, parent(from), ...` ending at the root, or at the first cell without a
    /// parent. Never longer than the number of cells.
    pub fn trace(&self, from: Cell) -> Vec<Cell> {
        std::iter::successors(Some(from), |&cell| self.parent(cell))
            .take(self.links.len())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_is_written_once() {
        let mut parents = ParentMap::new(3, Cell::new(0, 0));
        assert!(parents.record(Cell::new(0, 1), Cell::new(0, 0)));
        assert!(!parents.record(Cell::new(0, 1), Cell::new(1, 1)));
        assert_eq!(parents.parent(Cell::new(0, 1)), Some(Cell::new(0, 0)));
    }

    #[test]
    fn root_cannot_get_a_parent() {
        let mut parents = ParentMap::new(2, Cell::new(0, 0));
        assert!(parents.is_assigned(Cell::new(0, 0)));
        assert!(!parents.record(Cell::new(0, 0), Cell::new(0, 1)));
        assert_eq!(parents.parent(Cell::new(0, 0)), None);
    }

    #[test]
    fn trace_walks_back_to_root() {
        let mut parents = ParentMap::new(3, Cell::new(0, 0));
        parents.record(Cell::new(0, 1), Cell::new(0, 0));
        parents.record(Cell::new(1, 1), Cell::new(0, 1));
        parents.record(Cell::new(2, 1), Cell::new(1, 1));
        assert_eq!(
            parents.trace(Cell::new(2, 1)),
            vec![
                Cell::new(2, 1),
                Cell::new(1, 1),
                Cell::new(0, 1),
                Cell::new(0, 0)
            ]
        );
        assert_eq!(parents.trace(Cell::new(2, 2)), vec![Cell::new(2, 2)]);
    }
}
