use crate::models::Trip;

/// Walks a slice of trips one fixed-size page at a time.
#[derive(Debug, Clone)]
pub struct Paginator<'a> {
    trips: &'a [Trip],
    page_size: usize,
    position: usize,
}

impl<'a> Paginator<'a> {
    /// A `page_size` of 0 is treated as 1.
    pub fn new(trips: &'a [Trip], page_size: usize) -> Self {
        Self {
            trips,
            page_size: page_size.max(1),
            position: 0,
        }
    }

    /// The next page, or `None` once every trip has been shown.
    pub fn next_page(&mut self) -> Option<&'a [Trip]> {
        if self.is_exhausted() {
            return None;
        }
        let end = (self.position + self.page_size).min(self.trips.len());
        let page = &self.trips[self.position..end];
        self.position = end;
        Some(page)
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.trips.len()
    }

    /// Index of the first trip on the next page.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl<'a> Iterator for Paginator<'a> {
    type Item = &'a [Trip];

    fn next(&mut self) -> Option<Self::Item> {
        self.next_page()
    }
}
