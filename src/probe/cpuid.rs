//! Hypervisor-bit probe.
//!
//! CPUID leaf 0x01 reports processor features in ECX. Bit 31 is reserved on
//! bare metal and set by hypervisors to announce themselves to the guest.

use tracing::debug;

use super::provider::{CpuFeatures, CpuidRegisters};
use super::system::SystemProvider;
use super::verdict::Verdict;

pub const FEATURE_INFO_LEAF: u32 = 0x01;
pub const HYPERVISOR_PRESENT_BIT: u32 = 31;

/// Whether the hypervisor-present bit is set in a leaf 0x01 ECX value.
pub fn hypervisor_bit_set(ecx: u32) -> bool {
    ((ecx >> HYPERVISOR_PRESENT_BIT) & 0x01) == 1
}

pub fn check_with<C: CpuFeatures + ?Sized>(cpu: &C) -> Verdict {
    let Some(registers) = cpu.cpuid(FEATURE_INFO_LEAF) else {
        debug!("cpuid unavailable on this architecture");
        return Verdict::Inconclusive;
    };

    let present = hypervisor_bit_set(registers.ecx);
    debug!(ecx = registers.ecx, present, "hypervisor bit");
    Verdict::from_indicator(present)
}

/// FAILED when the CPU reports a hypervisor.
pub fn check() -> Verdict {
    check_with(&SystemProvider)
}

/// Executes CPUID on the current processor.
#[cfg(target_arch = "x86_64")]
pub(crate) fn read_leaf(leaf: u32) -> Option<CpuidRegisters> {
    let (eax, ebx, ecx, edx) = unsafe { cpuid_helper(leaf) };
    Some(CpuidRegisters { eax, ebx, ecx, edx })
}

#[cfg(target_arch = "x86")]
pub(crate) fn read_leaf(leaf: u32) -> Option<CpuidRegisters> {
    #[allow(unused_unsafe)]
    let result = unsafe { core::arch::x86::__cpuid(leaf) };
    Some(CpuidRegisters {
        eax: result.eax,
        ebx: result.ebx,
        ecx: result.ecx,
        edx: result.edx,
    })
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub(crate) fn read_leaf(_leaf: u32) -> Option<CpuidRegisters> {
    None
}

/// RBX is reserved by LLVM, so it is swapped through a scratch register
/// around the instruction. Sub-leaf (ECX) is pinned to 0.
#[cfg(target_arch = "x86_64")]
unsafe fn cpuid_helper(leaf: u32) -> (u32, u32, u32, u32) {
    let eax: u32;
    let ebx: u64;
    let ecx: u32;
    let edx: u32;

    std::arch::asm!(
        "mov {tmp}, rbx",
        "cpuid",
        "xchg {tmp}, rbx",
        tmp = out(reg) ebx,
        inout("eax") leaf => eax,
        inout("ecx") 0u32 => ecx,
        out("edx") edx,
        options(nomem, nostack, preserves_flags)
    );

    (eax, ebx as u32, ecx, edx)
}
