use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered table of integer counts.
#[derive(Debug, Clone)]
pub struct CountTable<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> CountTable<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Adds `count` to `key`, appending it at the end if it is new.
    pub fn add(&mut self, key: K, count: usize) {
        if let Some(&position) = self.index.get(&key) {
            self.entries[position].1 += count;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, count));
        }
    }

    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map_or(0, |&position| self.entries[position].1)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> + '_ {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }

    /// Reorders entries with a stable sort.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        self.entries.sort_by(|a, b| compare(&a.0, &b.0));
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (position, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), position);
        }
    }
}

impl<K: Eq + Hash + Clone> Default for CountTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq> PartialEq for CountTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq> Eq for CountTable<K> {}
