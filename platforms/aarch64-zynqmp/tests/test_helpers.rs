//! Recording doubles for the board collaborators and PSCI firmware.

#![allow(unused)]

use std::{
    cell::Cell,
    ops::Range,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use aarch64_zynqmp::{BoardHal, MemDesc};
use kpsci::{Conduit, PsciRet, PsciVersion, Trap, fid};
use memory_addr::{PhysAddr, VirtAddr, pa, va};
use rand::Rng;

pub const SECONDARY_ENTRY_VA: usize = 0xffff_d008_0000;
pub const SECONDARY_ENTRY_PA: usize = 0x4008_0000;
pub const KERNEL_TABLE_ROOT: usize = 0x0030_0000;

thread_local! {
    static CPU_ID: Cell<usize> = const { Cell::new(0) };
}

/// Marks the calling thread as logical CPU `id`.
pub fn set_cpu_id(id: usize) {
    CPU_ID.with(|c| c.set(id));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MapKernel {
        base: usize,
        size: usize,
        pv_offset: usize,
    },
    PageInit(Range<usize>),
    MmuSetup(Vec<MemDesc>),
    HeapInit(Range<usize>),
    IrqInit,
    UartInit,
    TimerInit,
    IdleHook(usize),
    Console(String),
    KtblSet(usize),
    VectorInit,
    GicCpuInit,
    LocalTimerInit,
}

/// A board whose collaborators only record what they were asked to do.
#[derive(Default)]
pub struct FakeHal {
    events: Mutex<Vec<(usize, Event)>>,
    unmapped_entry: bool,
    /// Incremented inside the secondary boot critical section without any
    /// atomicity of its own.
    pub section_counter: AtomicUsize,
    inside: AtomicUsize,
    pub max_inside: AtomicUsize,
    jitter: bool,
}

impl FakeHal {
    pub fn new() -> Self {
        Self::default()
    }

    /// The secondary entry point has no physical mapping.
    pub fn with_unmapped_entry(mut self) -> Self {
        self.unmapped_entry = true;
        self
    }

    /// Randomly stretch the read-modify-write in the critical section.
    pub fn with_jitter(mut self) -> Self {
        self.jitter = true;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().iter().map(|(_, e)| e.clone()).collect()
    }

    pub fn events_of(&self, cpu: usize) -> Vec<Event> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == cpu)
            .map(|(_, e)| e.clone())
            .collect()
    }

    fn record(&self, event: Event) {
        let cpu = CPU_ID.with(|c| c.get());
        self.events.lock().unwrap().push((cpu, event));
    }
}

impl BoardHal for FakeHal {
    fn map_kernel_aspace(&self, base: VirtAddr, size: usize, pv_offset: usize) {
        self.record(Event::MapKernel {
            base: base.as_usize(),
            size,
            pv_offset,
        });
    }

    fn page_init(&self, region: Range<PhysAddr>) {
        self.record(Event::PageInit(region.start.as_usize()..region.end.as_usize()));
    }

    fn mmu_setup(&self, descs: &[MemDesc]) {
        self.record(Event::MmuSetup(descs.to_vec()));
    }

    fn heap_init(&self, region: Range<VirtAddr>) {
        self.record(Event::HeapInit(region.start.as_usize()..region.end.as_usize()));
    }

    fn irq_init(&self) {
        self.record(Event::IrqInit);
    }

    fn uart_init(&self) {
        self.record(Event::UartInit);
    }

    fn timer_init(&self) {
        self.record(Event::TimerInit);
    }

    fn set_idle_hook(&self, hook: fn()) {
        self.record(Event::IdleHook(hook as usize));
    }

    fn console_set_device(&self, name: &str) {
        self.record(Event::Console(name.into()));
    }

    fn v2p(&self, vaddr: VirtAddr) -> Option<PhysAddr> {
        if self.unmapped_entry {
            return None;
        }
        assert_eq!(vaddr.as_usize(), SECONDARY_ENTRY_VA);
        Some(pa!(SECONDARY_ENTRY_PA))
    }

    fn secondary_entry(&self) -> VirtAddr {
        va!(SECONDARY_ENTRY_VA)
    }

    fn kernel_table_root(&self) -> PhysAddr {
        pa!(KERNEL_TABLE_ROOT)
    }

    fn ktbl_set(&self, root: PhysAddr) {
        self.record(Event::KtblSet(root.as_usize()));
    }

    fn vector_init(&self) {
        let now = self.inside.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_inside.fetch_max(now, Ordering::SeqCst);

        let value = self.section_counter.load(Ordering::Relaxed);
        if self.jitter {
            let mut rng = rand::thread_rng();
            for _ in 0..rng.gen_range(0..256) {
                std::hint::spin_loop();
            }
            if rng.gen_bool(0.3) {
                std::thread::yield_now();
            }
        }
        self.section_counter.store(value + 1, Ordering::Relaxed);

        self.inside.fetch_sub(1, Ordering::SeqCst);
        self.record(Event::VectorInit);
    }

    fn gic_cpu_init(&self) {
        self.record(Event::GicCpuInit);
    }

    fn local_timer_init(&self) {
        self.record(Event::LocalTimerInit);
    }

    fn cpu_id(&self) -> usize {
        CPU_ID.with(|c| c.get())
    }

    fn scheduler_start(&self) -> ! {
        panic!("scheduler started on cpu {}", self.cpu_id());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub conduit: Conduit,
    pub fid: u32,
    pub args: [usize; 3],
}

/// Firmware reporting a fixed version and answering everything else with
/// `status`.
pub struct FakeFirmware {
    version: PsciVersion,
    status: usize,
    calls: Mutex<Vec<Call>>,
}

impl FakeFirmware {
    pub fn new(version: PsciVersion) -> Self {
        Self {
            version,
            status: PsciRet::SUCCESS.as_word(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(mut self, status: PsciRet) -> Self {
        self.status = status.as_word();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn respond(&self, conduit: Conduit, fid: u32, args: [usize; 3]) -> usize {
        self.calls.lock().unwrap().push(Call { conduit, fid, args });
        match fid {
            fid::PSCI_0_2_FN_PSCI_VERSION => self.version.raw() as usize,
            fid::PSCI_1_0_FN_PSCI_FEATURES => PsciRet::NOT_SUPPORTED.as_word(),
            _ => self.status,
        }
    }
}

impl Trap for FakeFirmware {
    fn smc(&self, fid: u32, a0: usize, a1: usize, a2: usize) -> usize {
        self.respond(Conduit::Smc, fid, [a0, a1, a2])
    }

    fn hvc(&self, fid: u32, a0: usize, a1: usize, a2: usize) -> usize {
        self.respond(Conduit::Hvc, fid, [a0, a1, a2])
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
