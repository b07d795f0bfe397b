use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::Member;
use crate::member::{MemberError, MemberRepository};

/// Service for joining and looking up members.
///
/// A thin wrapper over the repository seam: which store actually backs it is
/// decided by whoever constructs the service.
pub struct MemberService {
    repository: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, member), fields(member_id = member.id))]
    pub fn join(&self, member: Member) {
        debug!(member_name = %member.name, "Joining member");
        self.repository.save(member);
    }

    #[instrument(skip(self))]
    pub fn find_member(&self, id: u64) -> Result<Member, MemberError> {
        debug!("Looking up member");
        self.repository.find_by_id(id).ok_or(MemberError::NotFound(id))
    }
}
