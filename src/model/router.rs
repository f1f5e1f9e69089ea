//! Screen routing with a back stack

use super::ui::ScreenKind;

/// Where the user is: a list screen, or one of its forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List(ScreenKind),
    Create(ScreenKind),
    Edit(ScreenKind, String),
}

impl Route {
    pub fn screen(&self) -> ScreenKind {
        match self {
            Route::List(s) | Route::Create(s) | Route::Edit(s, _) => *s,
        }
    }

    pub fn is_form(&self) -> bool {
        !matches!(self, Route::List(_))
    }
}

#[derive(Debug)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Go to `route`, remembering the current one; same-route is a no-op
    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Return to the previous route; false when already at the root
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Start over at `route`, forgetting the history
    pub fn replace_root(&mut self, route: Route) {
        self.history.clear();
        self.current = route;
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
