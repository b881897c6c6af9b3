#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use argb_flasher::serializer::TransferEngine;
use argb_flasher::serializer::TransmitError;
use argb_flasher::{Rgb, Transmitter};

/// Transmitter that records frames and can be held busy from the test
#[derive(Clone, Default)]
pub struct RecordingTransmitter {
    pub frames: Rc<std::cell::RefCell<Vec<Vec<Rgb>>>>,
    pub busy: Rc<Cell<bool>>,
    pub fail: Rc<Cell<bool>>,
}

impl RecordingTransmitter {
    pub fn sent(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn last(&self) -> Option<Vec<Rgb>> {
        self.frames.borrow().last().cloned()
    }
}

impl Transmitter for RecordingTransmitter {
    fn transmit(&mut self, frame: &[Rgb]) -> Result<(), TransmitError> {
        if self.fail.get() {
            return Err(TransmitError);
        }
        self.frames.borrow_mut().push(frame.to_vec());
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Transfer engine that stays active until the test completes it
pub struct MockEngine {
    pub buffer: Vec<u8>,
    pub started: Vec<usize>,
    pub active: bool,
}

impl MockEngine {
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![0xAA; len],
            started: Vec::new(),
            active: false,
        }
    }

    pub fn complete(&mut self) {
        self.active = false;
    }
}

impl TransferEngine for MockEngine {
    fn buffer(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn start(&mut self, len: usize) {
        self.started.push(len);
        self.active = true;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
