/// Cache maintenance between the CPU and memory behind the AMC/RTM link.
///
/// Gateware without a shared L2 cache may implement `flush_l2_cache` as a
/// no-op; it is never called unless the capability set asks for it.
pub trait CacheFlush {
    fn flush_cpu_dcache(&mut self);
    fn flush_l2_cache(&mut self);
}

/// Makes subsequent reads observe the backing storage. The core-local data
/// cache always goes first, then the shared L2 if the gateware has one.
pub fn flush<C: CacheFlush + ?Sized>(caches: &mut C, shared: bool) {
    debug!("flushing CPU data cache");
    caches.flush_cpu_dcache();
    if shared {
        debug!("flushing L2 cache");
        caches.flush_l2_cache();
    }
}

impl<'a, C: CacheFlush + ?Sized> CacheFlush for &'a mut C {
    fn flush_cpu_dcache(&mut self) {
        (**self).flush_cpu_dcache()
    }

    fn flush_l2_cache(&mut self) {
        (**self).flush_l2_cache()
    }
}
