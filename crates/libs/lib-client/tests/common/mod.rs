//! Fakes for the client seams.

#![allow(dead_code)]

use async_trait::async_trait;
use lib_client::star::{Scheduler, Star, StarCanvas};
use lib_client::submission::{
    ContactTransport, FormFields, FormView, JsonRequest, StatusMessage, TransportError,
    TransportResponse,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

// region: --- Form

#[derive(Default)]
pub struct FakeForm {
    pub fields: RefCell<FormFields>,
    pub status: RefCell<Option<StatusMessage>>,
    pub busy_changes: RefCell<Vec<bool>>,
}

impl FakeForm {
    pub fn filled(name: &str, email: &str, message: &str) -> Self {
        let form = Self::default();
        *form.fields.borrow_mut() = FormFields {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        };
        form
    }

    pub fn status_text(&self) -> Option<String> {
        self.status.borrow().as_ref().map(|s| s.text.clone())
    }
}

impl FormView for FakeForm {
    fn read_fields(&self) -> FormFields {
        self.fields.borrow().clone()
    }

    fn show_status(&self, status: &StatusMessage) {
        *self.status.borrow_mut() = Some(status.clone());
    }

    fn reset(&self) {
        *self.fields.borrow_mut() = FormFields::default();
    }

    fn set_busy(&self, busy: bool) {
        self.busy_changes.borrow_mut().push(busy);
    }
}

// endregion: --- Form

// region: --- Transport

/// Records requests and answers them from a queue of canned replies.
#[derive(Default)]
pub struct FakeTransport {
    pub requests: RefCell<Vec<JsonRequest>>,
    pub replies: RefCell<VecDeque<Result<TransportResponse, TransportError>>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push(Ok(TransportResponse { status, body: body.to_string() }));
        transport
    }

    pub fn failing(reason: &str) -> Self {
        let transport = Self::default();
        transport.push(Err(TransportError(reason.to_string())));
        transport
    }

    pub fn push(&self, reply: Result<TransportResponse, TransportError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl ContactTransport for FakeTransport {
    async fn send(&self, request: JsonRequest) -> Result<TransportResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        // give other submit events a chance to run while this one is in flight
        tokio::task::yield_now().await;
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no canned reply".to_string())))
    }
}

// endregion: --- Transport

// region: --- Canvas

#[derive(Default)]
pub struct FakeCanvas {
    next_id: Cell<u32>,
    pub live: RefCell<Vec<(u32, Star)>>,
    pub refuse: Cell<bool>,
}

impl FakeCanvas {
    pub fn count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl StarCanvas for FakeCanvas {
    type Node = u32;
    type Error = &'static str;

    fn append(&self, star: &Star) -> Result<u32, &'static str> {
        if self.refuse.get() {
            return Err("no body");
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.borrow_mut().push((id, *star));
        Ok(id)
    }

    fn remove(&self, node: &u32) {
        self.live.borrow_mut().retain(|(id, _)| id != node);
    }
}

// endregion: --- Canvas

// region: --- Scheduler

type Task = Box<dyn FnMut()>;

/// Holds timeouts until the test runs them; intervals fire on demand.
#[derive(Default)]
pub struct FakeScheduler {
    pub timeouts: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    pub interval: Rc<RefCell<Option<(u32, Task)>>>,
    pub detached: Cell<bool>,
}

pub struct FakeRepeat {
    slot: Rc<RefCell<Option<(u32, Task)>>>,
}

impl Drop for FakeRepeat {
    fn drop(&mut self) {
        self.slot.borrow_mut().take();
    }
}

impl FakeScheduler {
    pub fn fire_interval(&self) -> bool {
        let mut slot = self.interval.borrow_mut();
        match slot.as_mut() {
            Some((_, task)) => {
                task();
                true
            }
            None => false,
        }
    }

    pub fn pending_delays(&self) -> Vec<u32> {
        self.timeouts.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_timeouts(&self) {
        let due: Vec<_> = self.timeouts.borrow_mut().drain(..).collect();
        for (_, task) in due {
            task();
        }
    }
}

impl Scheduler for FakeScheduler {
    type Repeat = FakeRepeat;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.timeouts.borrow_mut().push((delay_ms, task));
    }

    fn every(&self, period_ms: u32, task: Task) -> FakeRepeat {
        *self.interval.borrow_mut() = Some((period_ms, task));
        FakeRepeat { slot: Rc::clone(&self.interval) }
    }

    fn detach(&self, repeat: FakeRepeat) {
        self.detached.set(true);
        std::mem::forget(repeat);
    }
}

// endregion: --- Scheduler
