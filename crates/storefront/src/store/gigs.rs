//! Gig listings.
//!
//! All sellers' gigs share one array under [`keys::GIGS`]; ownership is
//! the `sellerId` field.

use workforge_core::{Gig, GigId, Storage, UserId};

use super::{StoreError, keys, read, write};

/// Repository for gig listings.
pub struct GigRepository<'a, S: Storage + ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: Storage + ?Sized> GigRepository<'a, S> {
    /// Create a new gig repository.
    pub const fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// Every stored gig in storage order.
    #[must_use]
    pub fn all(&self) -> Vec<Gig> {
        read(&*self.storage, keys::GIGS, Vec::new())
    }

    /// Gigs owned by `seller_id`.
    #[must_use]
    pub fn by_seller(&self, seller_id: &UserId) -> Vec<Gig> {
        self.all()
            .into_iter()
            .filter(|g| &g.seller_id == seller_id)
            .collect()
    }

    #[must_use]
    pub fn find(&self, id: &GigId) -> Option<Gig> {
        self.all().into_iter().find(|g| &g.id == id)
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the gigs cannot be serialized.
    pub fn save_all(&mut self, gigs: &[Gig]) -> Result<(), StoreError> {
        write(self.storage, keys::GIGS, gigs)
    }

    /// Replace the gig with the same ID in place, or append it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the gigs cannot be serialized.
    pub fn upsert(&mut self, gig: Gig) -> Result<(), StoreError> {
        let mut gigs = self.all();
        match gigs.iter_mut().find(|g| g.id == gig.id) {
            Some(existing) => *existing = gig,
            None => gigs.push(gig),
        }
        self.save_all(&gigs)
    }

    /// Remove the gig with `id`, leaving every other gig untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the gigs cannot be serialized.
    pub fn delete(&mut self, id: &GigId) -> Result<(), StoreError> {
        let gigs: Vec<Gig> = self.all().into_iter().filter(|g| &g.id != id).collect();
        self.save_all(&gigs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use workforge_core::{MemoryStorage, Packages};

    fn gig(id: &str, seller: &str, title: &str) -> Gig {
        Gig {
            id: GigId::new(id),
            seller_id: UserId::new(seller),
            title: title.to_string(),
            category: "Writing".to_string(),
            subcategory: "Blog Posts".to_string(),
            description_html: "<p>Posts</p>".to_string(),
            skills: vec!["SEO".to_string(), "Content".to_string()],
            packages: Packages::default(),
            requirements: Vec::new(),
            thumbnail: None,
            gallery: Vec::new(),
            rating: None,
        }
    }

    #[test]
    fn test_upsert_then_read_round_trips() {
        let mut storage = MemoryStorage::new();
        let mut repo = GigRepository::new(&mut storage);
        let written = gig("g_1", "u_a", "Blog posts");

        repo.upsert(written.clone()).unwrap();

        let all = repo.all();
        assert_eq!(all.iter().filter(|g| g.id == written.id).count(), 1);
        assert_eq!(repo.find(&written.id), Some(written));
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut storage = MemoryStorage::new();
        let mut repo = GigRepository::new(&mut storage);
        repo.upsert(gig("g_1", "u_a", "First")).unwrap();
        repo.upsert(gig("g_2", "u_a", "Second")).unwrap();
        repo.upsert(gig("g_1", "u_a", "First, edited")).unwrap();

        let titles: Vec<_> = repo.all().into_iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["First, edited", "Second"]);
    }

    #[test]
    fn test_delete_removes_only_that_gig() {
        let mut storage = MemoryStorage::new();
        let mut repo = GigRepository::new(&mut storage);
        repo.upsert(gig("g_1", "u_a", "One")).unwrap();
        repo.upsert(gig("g_2", "u_b", "Two")).unwrap();
        repo.upsert(gig("g_3", "u_a", "Three")).unwrap();

        repo.delete(&GigId::new("g_2")).unwrap();

        let ids: Vec<_> = repo.all().into_iter().map(|g| g.id.into_inner()).collect();
        assert_eq!(ids, vec!["g_1", "g_3"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut storage = MemoryStorage::new();
        let mut repo = GigRepository::new(&mut storage);
        repo.upsert(gig("g_1", "u_a", "One")).unwrap();
        repo.delete(&GigId::new("g_missing")).unwrap();
        assert_eq!(repo.all().len(), 1);
    }

    #[test]
    fn test_by_seller_filters() {
        let mut storage = MemoryStorage::new();
        let mut repo = GigRepository::new(&mut storage);
        repo.upsert(gig("g_1", "u_a", "One")).unwrap();
        repo.upsert(gig("g_2", "u_b", "Two")).unwrap();

        let mine = repo.by_seller(&UserId::new("u_b"));
        assert_eq!(mine.len(), 1);
        assert_eq!(mine.first().unwrap().title, "Two");
    }

    #[test]
    fn test_corrupt_gigs_read_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(keys::GIGS, "[{\"id\":".to_string());
        assert!(GigRepository::new(&mut storage).all().is_empty());
    }
}
