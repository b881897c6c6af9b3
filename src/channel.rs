//! Command queue between the event layer and the render loop.
//!
//! Events usually arrive in interrupt context while the strip is driven from
//! the main loop. The queue is a fixed `heapless::Deque` behind a
//! `critical-section` mutex, so it can live in a `static` and be shared by
//! both sides.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::event::{DecodeError, LedEvent, decode_delivery};
use crate::index::IndexPair;

/// Work item for the strip controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripCommand {
    /// Apply a decoded event
    Event(LedEvent),
    /// Overwrite a range directly
    UpdateRange { start: u8, end: u8, pair: IndexPair },
    /// Redraw without changing LED data
    Refresh,
    /// Clear every LED to black
    FactoryReset,
}

/// Error returned when the queue is full. Carries the rejected command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueFull(pub StripCommand);

struct Inner<const SIZE: usize> {
    queue: Deque<StripCommand, SIZE>,
    dropped: u32,
}

/// Bounded, interrupt safe command queue
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Inner<SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Inner {
                queue: Deque::new(),
                dropped: 0,
            })),
        }
    }

    /// Handle for the producing side
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Handle for the render loop
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Enqueue a command. A full queue counts the command as dropped.
    pub fn try_send(&self, command: StripCommand) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut inner = self.inner.borrow(cs).borrow_mut();
            inner.queue.push_back(command).map_err(|command| {
                inner.dropped = inner.dropped.saturating_add(1);
                QueueFull(command)
            })
        })
    }

    pub fn try_receive(&self) -> Option<StripCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().queue.pop_front())
    }

    /// Commands rejected because the queue was full
    pub fn dropped(&self) -> u32 {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().dropped)
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: StripCommand) -> Result<(), QueueFull> {
        self.queue.try_send(command)
    }

    /// Queue a consumed event as delivered by the event layer.
    ///
    /// Unreadable parameters are consumed here and never queued.
    pub fn send_event(
        &self,
        opcode: u8,
        params: Result<&[u8], DecodeError>,
    ) -> Result<(), QueueFull> {
        match decode_delivery(opcode, params) {
            Some(event) => self.try_send(StripCommand::Event(event)),
            None => Ok(()),
        }
    }
}

/// Consumer handle for a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<StripCommand> {
        self.queue.try_receive()
    }
}
