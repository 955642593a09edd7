use crate::core::domain::Identifiable;

// InMemoryRepository keeps records in insertion order and answers every lookup
// with a linear scan.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<Entity> {
    records: Vec<Entity>,
}

impl<Entity> Default for InMemoryRepository<Entity> {
    fn default() -> Self {
        Self { records: vec![] }
    }
}

impl<Entity: Identifiable + Clone> InMemoryRepository<Entity> {
    pub fn new() -> Self {
        Self::default()
    }

    // create an entity, duplicates of business keys are accepted
    pub fn create(&mut self, entity: Entity) -> &Entity {
        self.records.push(entity);
        &self.records[self.records.len() - 1]
    }

    // get an entity by its identity
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.records.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.records.iter_mut().find(|e| e.id() == id)
    }

    // first record matching the predicate in insertion order
    pub fn find_first<P>(&self, predicate: P) -> Option<&Entity>
        where P: Fn(&Entity) -> bool {
        self.records.iter().find(|e| predicate(e))
    }

    pub fn find_first_mut<P>(&mut self, predicate: P) -> Option<&mut Entity>
        where P: Fn(&Entity) -> bool {
        self.records.iter_mut().find(|e| predicate(e))
    }

    // all records matching the predicate, copied out in insertion order
    pub fn query<P>(&self, predicate: P) -> Vec<Entity>
        where P: Fn(&Entity) -> bool {
        self.records.iter().filter(|e| predicate(e)).cloned().collect()
    }

    pub fn all(&self) -> Vec<Entity> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::repository::InMemoryRepository;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: String,
        name: String,
    }

    impl Record {
        fn new(id: &str, name: &str) -> Self {
            Self { id: id.to_string(), name: name.to_string() }
        }
    }

    impl Identifiable for Record {
        fn id(&self) -> String {
            self.id.to_string()
        }
    }

    #[tokio::test]
    async fn test_should_create_and_get() {
        let mut repo = InMemoryRepository::new();
        assert!(repo.is_empty());
        let created = repo.create(Record::new("1", "first")).clone();
        assert_eq!("first", created.name.as_str());
        assert_eq!(Some(&created), repo.get("1"));
        assert_eq!(None, repo.get("2"));
        assert_eq!(1, repo.len());
    }

    #[tokio::test]
    async fn test_should_keep_insertion_order() {
        let mut repo = InMemoryRepository::new();
        repo.create(Record::new("1", "b"));
        repo.create(Record::new("2", "a"));
        repo.create(Record::new("3", "b"));
        let names: Vec<String> = repo.all().into_iter().map(|r| r.id).collect();
        assert_eq!(vec!["1", "2", "3"], names);
        assert_eq!("1", repo.find_first(|r| r.name == "b").expect("should find").id.as_str());
        assert_eq!(2, repo.query(|r| r.name == "b").len());
    }

    #[tokio::test]
    async fn test_should_return_copies() {
        let mut repo = InMemoryRepository::new();
        repo.create(Record::new("1", "first"));
        let mut snapshot = repo.all();
        snapshot.clear();
        assert_eq!(1, repo.len());
    }

    #[tokio::test]
    async fn test_should_mutate_in_place() {
        let mut repo = InMemoryRepository::new();
        repo.create(Record::new("1", "first"));
        repo.get_mut("1").expect("should find").name = "changed".to_string();
        assert_eq!("changed", repo.get("1").expect("should find").name.as_str());
        repo.find_first_mut(|r| r.id == "1").expect("should find").name = "again".to_string();
        assert_eq!("again", repo.get("1").expect("should find").name.as_str());
    }
}
