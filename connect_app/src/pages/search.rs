use crate::toast::Toasts;

use connect_domain::profile::{Profile, ProfileApi};

#[derive(Default)]
pub struct SearchPage {
    pub term: String,
    pub results: Vec<Profile>,
    pub loading: bool,
    /// Whether a search has completed since the page opened.
    pub searched: bool,
}

impl SearchPage {
    pub async fn search(&mut self, deps: &impl ProfileApi, toasts: &mut Toasts) {
        self.loading = true;
        match deps.search_profiles(&self.term).await {
            Ok(results) => {
                self.results = results;
                self.searched = true;
            }
            Err(e) => toasts.error(&e),
        }
        self.loading = false;
    }

    pub fn empty_message(&self) -> Option<String> {
        (self.searched && self.results.is_empty())
            .then(|| format!("No users found matching \"{}\"", self.term.trim()))
    }
}
