//! View state with stale-response protection
//!
//! Every view starts in `Loading`. A fetch takes a [`Ticket`] from
//! [`View::begin`]; only a completion carrying the newest ticket can move the
//! view to `Loaded`. Failures leave the view in `Loading` (there is no error
//! state). Completions with an old ticket are dropped, so a slow batch can't
//! overwrite the result of a newer one.

/// Generation stamp handed to a fetch when it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[cfg(test)]
    fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<'a, T> {
    /// Waiting on a fetch. Carries whatever was on screen before, if anything.
    Loading { previous: Option<&'a T> },
    Loaded(&'a T),
}

/// Outcome of delivering a fetch result to a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    /// The ticket belongs to a superseded fetch
    Stale,
}

#[derive(Debug, Clone)]
pub struct View<T> {
    data: Option<T>,
    loading: bool,
    generation: u64,
}

impl<T> Default for View<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> View<T> {
    pub fn new() -> Self {
        Self {
            data: None,
            loading: true,
            generation: 0,
        }
    }

    /// Start a new fetch. Previous tickets become stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        Ticket(self.generation)
    }

    /// Drop whatever the view holds and invalidate every outstanding ticket.
    /// Used when navigating away: nothing is reused on return.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.data = None;
        self.loading = true;
    }

    pub fn complete(&mut self, ticket: Ticket, value: T) -> Delivery {
        if !self.is_current(ticket) {
            return Delivery::Stale;
        }

        self.data = Some(value);
        self.loading = false;
        Delivery::Applied
    }

    /// Record a failed fetch. The view keeps loading.
    pub fn fail(&mut self, ticket: Ticket) -> Delivery {
        if !self.is_current(ticket) {
            return Delivery::Stale;
        }

        self.loading = true;
        Delivery::Applied
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[cfg(test)]
    fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> ViewState<'_, T> {
        match (&self.data, self.loading) {
            (Some(data), false) => ViewState::Loaded(data),
            (previous, _) => ViewState::Loading {
                previous: previous.as_ref(),
            },
        }
    }

    /// The last successfully loaded value, even while a newer fetch is in flight
    #[cfg(test)]
    fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
