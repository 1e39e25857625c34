//! Hand-written test doubles for the team service and repository
//!
//! Each operation has an optional hook and an invocation counter. Calling an
//! operation without a hook panics, so tests only wire what they expect.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::team_service::{TeamInput, TeamOutput, TeamService};
use crate::domain::errors::Result;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

type Hook<A, R> = Box<dyn Fn(A) -> R + Send + Sync>;

fn invoke<A, R>(hook: &Option<Hook<A, R>>, counter: &AtomicUsize, name: &str, arg: A) -> R {
    counter.fetch_add(1, Ordering::SeqCst);
    match hook {
        Some(hook) => hook(arg),
        None => panic!("{} called without a hook", name),
    }
}

#[derive(Default)]
pub struct MockTeamService {
    create_fn: Option<Hook<TeamInput, Result<TeamOutput>>>,
    get_fn: Option<Hook<String, Result<TeamOutput>>>,
    remove_fn: Option<Hook<String, Result<()>>>,
    get_all_fn: Option<Hook<(), Result<Vec<TeamOutput>>>>,
    create_invoked: AtomicUsize,
    get_invoked: AtomicUsize,
    remove_invoked: AtomicUsize,
    get_all_invoked: AtomicUsize,
}

impl MockTeamService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_create(
        mut self,
        f: impl Fn(TeamInput) -> Result<TeamOutput> + Send + Sync + 'static,
    ) -> Self {
        self.create_fn = Some(Box::new(f));
        self
    }

    pub fn with_get(mut self, f: impl Fn(String) -> Result<TeamOutput> + Send + Sync + 'static) -> Self {
        self.get_fn = Some(Box::new(f));
        self
    }

    pub fn with_remove(mut self, f: impl Fn(String) -> Result<()> + Send + Sync + 'static) -> Self {
        self.remove_fn = Some(Box::new(f));
        self
    }

    pub fn with_get_all(
        mut self,
        f: impl Fn() -> Result<Vec<TeamOutput>> + Send + Sync + 'static,
    ) -> Self {
        self.get_all_fn = Some(Box::new(move |()| f()));
        self
    }

    pub fn create_invoked_count(&self) -> usize {
        self.create_invoked.load(Ordering::SeqCst)
    }

    pub fn get_invoked_count(&self) -> usize {
        self.get_invoked.load(Ordering::SeqCst)
    }

    pub fn remove_invoked_count(&self) -> usize {
        self.remove_invoked.load(Ordering::SeqCst)
    }

    pub fn get_all_invoked_count(&self) -> usize {
        self.get_all_invoked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeamService for MockTeamService {
    async fn create(&self, input: TeamInput) -> Result<TeamOutput> {
        invoke(&self.create_fn, &self.create_invoked, "create", input)
    }

    async fn get(&self, id: &str) -> Result<TeamOutput> {
        invoke(&self.get_fn, &self.get_invoked, "get", id.to_string())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        invoke(&self.remove_fn, &self.remove_invoked, "remove", id.to_string())
    }

    async fn get_all(&self) -> Result<Vec<TeamOutput>> {
        invoke(&self.get_all_fn, &self.get_all_invoked, "get_all", ())
    }
}

#[derive(Default)]
pub struct MockTeamRepository {
    insert_one_fn: Option<Hook<Team, Result<Team>>>,
    find_one_fn: Option<Hook<String, Result<Team>>>,
    delete_one_fn: Option<Hook<String, Result<()>>>,
    find_fn: Option<Hook<(), Result<Vec<Team>>>>,
    insert_one_invoked: AtomicUsize,
    find_one_invoked: AtomicUsize,
    delete_one_invoked: AtomicUsize,
    find_invoked: AtomicUsize,
}

impl MockTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insert_one(mut self, f: impl Fn(Team) -> Result<Team> + Send + Sync + 'static) -> Self {
        self.insert_one_fn = Some(Box::new(f));
        self
    }

    pub fn with_find_one(mut self, f: impl Fn(String) -> Result<Team> + Send + Sync + 'static) -> Self {
        self.find_one_fn = Some(Box::new(f));
        self
    }

    pub fn with_delete_one(mut self, f: impl Fn(String) -> Result<()> + Send + Sync + 'static) -> Self {
        self.delete_one_fn = Some(Box::new(f));
        self
    }

    pub fn with_find(mut self, f: impl Fn() -> Result<Vec<Team>> + Send + Sync + 'static) -> Self {
        self.find_fn = Some(Box::new(move |()| f()));
        self
    }

    pub fn insert_one_invoked_count(&self) -> usize {
        self.insert_one_invoked.load(Ordering::SeqCst)
    }

    pub fn find_one_invoked_count(&self) -> usize {
        self.find_one_invoked.load(Ordering::SeqCst)
    }

    pub fn delete_one_invoked_count(&self) -> usize {
        self.delete_one_invoked.load(Ordering::SeqCst)
    }

    pub fn find_invoked_count(&self) -> usize {
        self.find_invoked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeamRepository for MockTeamRepository {
    async fn insert_one(&self, team: Team) -> Result<Team> {
        invoke(&self.insert_one_fn, &self.insert_one_invoked, "insert_one", team)
    }

    async fn find_one(&self, id: &str) -> Result<Team> {
        invoke(&self.find_one_fn, &self.find_one_invoked, "find_one", id.to_string())
    }

    async fn delete_one(&self, id: &str) -> Result<()> {
        invoke(&self.delete_one_fn, &self.delete_one_invoked, "delete_one", id.to_string())
    }

    async fn find(&self) -> Result<Vec<Team>> {
        invoke(&self.find_fn, &self.find_invoked, "find", ())
    }
}
