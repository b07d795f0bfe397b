use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::Member;

/// Storage seam for members. The services depend on this trait, never on a
/// concrete store, so the composition root decides which implementation runs.
pub trait MemberRepository: Send + Sync {
    /// Inserts the member, overwriting any previous member with the same id.
    fn save(&self, member: Member);

    /// Looks up a member by id, returning a clone of the stored value.
    fn find_by_id(&self, id: u64) -> Option<Member>;
}

/// In-memory store backed by a `HashMap`. State vanishes with the value.
///
/// The mutex exists so the store can live behind a shared `Arc` handle; the
/// system is single-threaded and never contends on it.
#[derive(Default)]
pub struct MemoryMemberRepository {
    store: Mutex<HashMap<u64, Member>>,
}

impl MemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemberRepository for MemoryMemberRepository {
    fn save(&self, member: Member) {
        let mut store = self.store.lock().expect("member store lock poisoned");
        store.insert(member.id, member);
    }

    fn find_by_id(&self, id: u64) -> Option<Member> {
        let store = self.store.lock().expect("member store lock poisoned");
        store.get(&id).cloned()
    }
}
