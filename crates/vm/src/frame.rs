//! Call frame protocol for CLL/RET.
//!
//! A frame has no separate storage. CLL pushes three linkage slots onto the
//! stack and RET reads them back:
//!
//! ```text
//! stack[BSP]     return ip (index of the CLL)
//! stack[BSP + 1] caller's BSP
//! stack[BSP + 2] caller's SFP        <- SFP on entry
//! stack[BSP + 3] first local
//! ```
//!
//! Returning truncates the stack to `BSP`, dropping the linkage and every
//! value the callee pushed. ACC and BAK are not saved.

use std::io::Write;

use crate::error::RuntimeError;
use crate::machine::Machine;

/// Number of linkage slots at the base of every frame.
pub const LINKAGE_SLOTS: usize = 3;

impl<W: Write> Machine<'_, W> {
    /// Open a frame and transfer control so that `target` executes next.
    pub(crate) fn call(&mut self, target: i64) {
        let old_bp = self.bsp;
        self.bsp = self.stack.len() as i64;
        self.stack.push(self.ip);
        self.stack.push(old_bp);
        self.stack.push(self.sfp);
        self.sfp = self.stp();
        self.ip = target.wrapping_sub(1);
    }

    /// Drop the current frame and restore the caller's BSP, SFP and ip.
    ///
    /// The ip is restored to the CLL itself; the normal step advance then
    /// moves past it.
    pub(crate) fn ret(&mut self) -> Result<(), RuntimeError> {
        let base = self.frame_base()?;
        let saved_ip = self.stack[base];
        let saved_bp = self.stack[base + 1];
        let saved_sfp = self.stack[base + 2];

        self.stack.truncate(base);
        self.bsp = saved_bp;
        self.sfp = saved_sfp;
        self.ip = saved_ip;
        Ok(())
    }

    /// BSP as an index with all three linkage slots inside the stack.
    fn frame_base(&self) -> Result<usize, RuntimeError> {
        usize::try_from(self.bsp)
            .ok()
            .filter(|&base| {
                base.checked_add(LINKAGE_SLOTS)
                    .is_some_and(|end| end <= self.stack.len())
            })
            .ok_or(RuntimeError::FrameOutOfBounds {
                at: self.at(),
                base: self.bsp,
                length: self.stack.len(),
            })
    }
}
