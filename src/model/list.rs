use super::todo::Todo;

/// The three authoritative lists, in view order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Backlog,
    Ready,
    Completed,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Backlog, ListKind::Ready, ListKind::Completed];

    /// Suffix used in store names (`todo_<suffix>.txt`)
    pub fn store_suffix(self) -> &'static str {
        match self {
            ListKind::Backlog => "backlog",
            ListKind::Ready => "ready",
            ListKind::Completed => "completed",
        }
    }

    /// Inverse of `store_suffix`
    pub fn from_name(name: &str) -> Option<ListKind> {
        ListKind::ALL.into_iter().find(|k| k.store_suffix() == name)
    }

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            ListKind::Backlog => "BACKLOG",
            ListKind::Ready => "READY",
            ListKind::Completed => "COMPLETED",
        }
    }

    /// Neighbor to the left, if any (no wrapping)
    pub fn left(self) -> Option<ListKind> {
        match self {
            ListKind::Backlog => None,
            ListKind::Ready => Some(ListKind::Backlog),
            ListKind::Completed => Some(ListKind::Ready),
        }
    }

    /// Neighbor to the right, if any (no wrapping)
    pub fn right(self) -> Option<ListKind> {
        match self {
            ListKind::Backlog => Some(ListKind::Ready),
            ListKind::Ready => Some(ListKind::Completed),
            ListKind::Completed => None,
        }
    }

    /// Backlog and ready support manual ordering and adding
    pub fn is_ordered(self) -> bool {
        !matches!(self, ListKind::Completed)
    }
}

/// Owner of the authoritative lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lists {
    pub backlog: Vec<Todo>,
    pub ready: Vec<Todo>,
    pub completed: Vec<Todo>,
}

impl Lists {
    pub fn get(&self, kind: ListKind) -> &Vec<Todo> {
        match kind {
            ListKind::Backlog => &self.backlog,
            ListKind::Ready => &self.ready,
            ListKind::Completed => &self.completed,
        }
    }

    pub fn get_mut(&mut self, kind: ListKind) -> &mut Vec<Todo> {
        match kind {
            ListKind::Backlog => &mut self.backlog,
            ListKind::Ready => &mut self.ready,
            ListKind::Completed => &mut self.completed,
        }
    }

    /// Two different lists borrowed mutably at once. None if `a == b`.
    pub fn pair_mut(
        &mut self,
        a: ListKind,
        b: ListKind,
    ) -> Option<(&mut Vec<Todo>, &mut Vec<Todo>)> {
        use ListKind::*;
        let Lists {
            backlog,
            ready,
            completed,
        } = self;
        match (a, b) {
            (Backlog, Ready) => Some((backlog, ready)),
            (Ready, Backlog) => Some((ready, backlog)),
            (Backlog, Completed) => Some((backlog, completed)),
            (Completed, Backlog) => Some((completed, backlog)),
            (Ready, Completed) => Some((ready, completed)),
            (Completed, Ready) => Some((completed, ready)),
            _ => None,
        }
    }
}
