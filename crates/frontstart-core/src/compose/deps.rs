//! Dependency accumulation into runtime, development and global buckets

use serde::Serialize;

/// Which install invocation a package belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Runtime,
    Development,
    /// Never installed automatically, only reported
    Global,
}

/// Ordered package names, each present at most once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyBucket(Vec<String>);

impl DependencyBucket {
    /// Append `name` unless already requested; returns whether it was added
    pub fn push(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The three dependency buckets of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dependencies {
    pub runtime: DependencyBucket,
    pub development: DependencyBucket,
    pub global: DependencyBucket,
}

impl Dependencies {
    pub fn add(&mut self, bucket: Bucket, name: &str) {
        if !self.bucket_mut(bucket).push(name) {
            tracing::trace!(?bucket, name, "dependency already requested");
        }
    }

    pub fn extend<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = &'a (Bucket, &'static str)>,
    {
        for (bucket, name) in entries {
            self.add(*bucket, name);
        }
    }

    pub fn bucket(&self, bucket: Bucket) -> &DependencyBucket {
        match bucket {
            Bucket::Runtime => &self.runtime,
            Bucket::Development => &self.development,
            Bucket::Global => &self.global,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut DependencyBucket {
        match bucket {
            Bucket::Runtime => &mut self.runtime,
            Bucket::Development => &mut self.development,
            Bucket::Global => &mut self.global,
        }
    }
}
