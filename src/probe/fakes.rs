//! Scripted providers for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use super::error::{ProbeError, Result};
use super::provider::{
    CpuFeatures, CpuidRegisters, CursorPoint, CursorPosition, DebuggerStatus, RegistryAccess,
    RegistryHive, RegistryKey, Sleeper, WindowInfo,
};

pub struct FixedDebugger(pub bool);

impl DebuggerStatus for FixedDebugger {
    fn is_debugger_present(&self) -> bool {
        self.0
    }
}

/// Records requested durations instead of sleeping.
#[derive(Default)]
pub struct CountingSleeper {
    calls: Cell<u32>,
    total: Cell<Duration>,
}

impl CountingSleeper {
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    pub fn total(&self) -> Duration {
        self.total.get()
    }
}

impl Sleeper for CountingSleeper {
    fn sleep(&self, duration: Duration) {
        self.calls.set(self.calls.get() + 1);
        self.total.set(self.total.get() + duration);
    }
}

/// Pops one entry per read. Once exhausted it keeps repeating the last one.
pub struct ScriptedWindow {
    titles: RefCell<VecDeque<Option<String>>>,
    last: RefCell<Option<String>>,
    reads: Cell<u32>,
}

impl ScriptedWindow {
    pub fn new(titles: Vec<Option<String>>) -> Self {
        Self {
            titles: RefCell::new(titles.into()),
            last: RefCell::new(None),
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl WindowInfo for ScriptedWindow {
    fn foreground_window_title(&self) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        if let Some(next) = self.titles.borrow_mut().pop_front() {
            *self.last.borrow_mut() = next;
        }
        self.last.borrow().clone()
    }
}

pub struct FakeKey {
    value_count: Result<u32>,
    closed: Rc<Cell<u32>>,
}

impl RegistryKey for FakeKey {
    fn value_count(&self) -> Result<u32> {
        self.value_count.clone()
    }
}

impl Drop for FakeKey {
    fn drop(&mut self) {
        self.closed.set(self.closed.get() + 1);
    }
}

enum FakeEntry {
    Present(Result<u32>),
    OpenError(ProbeError),
}

/// In-memory registry that counts opened and released handles.
#[derive(Default)]
pub struct FakeRegistry {
    entries: HashMap<(RegistryHive, String), FakeEntry>,
    opened: Cell<u32>,
    closed: Rc<Cell<u32>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key that opens and answers value-count queries with `value_count`.
    pub fn with_key(mut self, hive: RegistryHive, path: &str, value_count: Result<u32>) -> Self {
        self.entries
            .insert((hive, path.to_string()), FakeEntry::Present(value_count));
        self
    }

    pub fn with_open_error(mut self, hive: RegistryHive, path: &str, error: ProbeError) -> Self {
        self.entries
            .insert((hive, path.to_string()), FakeEntry::OpenError(error));
        self
    }

    pub fn opened(&self) -> u32 {
        self.opened.get()
    }

    pub fn closed(&self) -> u32 {
        self.closed.get()
    }
}

impl RegistryAccess for FakeRegistry {
    type Key = FakeKey;

    fn open_key(&self, hive: RegistryHive, path: &str) -> Result<FakeKey> {
        match self.entries.get(&(hive, path.to_string())) {
            Some(FakeEntry::Present(value_count)) => {
                self.opened.set(self.opened.get() + 1);
                Ok(FakeKey {
                    value_count: value_count.clone(),
                    closed: Rc::clone(&self.closed),
                })
            }
            Some(FakeEntry::OpenError(error)) => Err(error.clone()),
            None => Err(ProbeError::registry_open(path, 2)),
        }
    }
}

pub struct FixedCpu {
    registers: Option<CpuidRegisters>,
    last_leaf: Cell<Option<u32>>,
}

impl FixedCpu {
    pub fn with_ecx(ecx: u32) -> Self {
        Self {
            registers: Some(CpuidRegisters {
                ecx,
                ..CpuidRegisters::default()
            }),
            last_leaf: Cell::new(None),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            registers: None,
            last_leaf: Cell::new(None),
        }
    }

    pub fn last_leaf(&self) -> Option<u32> {
        self.last_leaf.get()
    }
}

impl CpuFeatures for FixedCpu {
    fn cpuid(&self, leaf: u32) -> Option<CpuidRegisters> {
        self.last_leaf.set(Some(leaf));
        self.registers
    }
}

/// Pops one position per read. Once exhausted it repeats the last entry.
pub struct ScriptedCursor {
    positions: RefCell<VecDeque<Result<CursorPoint>>>,
    last: RefCell<Result<CursorPoint>>,
    reads: Cell<u32>,
}

impl ScriptedCursor {
    pub fn new(positions: Vec<Result<CursorPoint>>) -> Self {
        Self {
            positions: RefCell::new(positions.into()),
            last: RefCell::new(Ok(CursorPoint::default())),
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl CursorPosition for ScriptedCursor {
    fn cursor_position(&self) -> Result<CursorPoint> {
        self.reads.set(self.reads.get() + 1);
        if let Some(next) = self.positions.borrow_mut().pop_front() {
            *self.last.borrow_mut() = next;
        }
        self.last.borrow().clone()
    }
}

/// Every provider family behind one value, for `Fingerprinter` tests.
pub struct FakeSystem {
    pub debugger: FixedDebugger,
    pub window: ScriptedWindow,
    pub registry: FakeRegistry,
    pub cpu: FixedCpu,
    pub cursor: ScriptedCursor,
}

impl DebuggerStatus for FakeSystem {
    fn is_debugger_present(&self) -> bool {
        self.debugger.is_debugger_present()
    }
}

impl WindowInfo for FakeSystem {
    fn foreground_window_title(&self) -> Option<String> {
        self.window.foreground_window_title()
    }
}

impl RegistryAccess for FakeSystem {
    type Key = FakeKey;

    fn open_key(&self, hive: RegistryHive, path: &str) -> Result<FakeKey> {
        self.registry.open_key(hive, path)
    }
}

impl CpuFeatures for FakeSystem {
    fn cpuid(&self, leaf: u32) -> Option<CpuidRegisters> {
        self.cpu.cpuid(leaf)
    }
}

impl CursorPosition for FakeSystem {
    fn cursor_position(&self) -> Result<CursorPoint> {
        self.cursor.cursor_position()
    }
}
