//! Build-time lane configuration.
//!
//! The vector extension and the availability of a hardware fused multiply-add are decided once by
//! the build script from the target features; nothing here can change at runtime. The cargo
//! feature `no-simd` forces scalar packed lanes, and the cargo feature `fma` turns a missing
//! hardware FMA into a build error.

use core::fmt;

/// Vector extension the packed lane types are built on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimdExtension {
    /// Packed types are plain scalars.
    None,
    /// 128-bit registers.
    Sse,
    /// 256-bit registers.
    Avx,
}

impl SimdExtension {
    pub const fn register_bits(self) -> usize {
        match self {
            SimdExtension::None => 0,
            SimdExtension::Sse => 128,
            SimdExtension::Avx => 256,
        }
    }

    /// Number of `f32` lanes in [`crate::Floatx`].
    pub const fn float_lanes(self) -> usize {
        match self {
            SimdExtension::None => 1,
            _ => self.register_bits() / 32,
        }
    }

    /// Number of `f64` lanes in [`crate::Doublex`].
    pub const fn double_lanes(self) -> usize {
        match self {
            SimdExtension::None => 1,
            _ => self.register_bits() / 64,
        }
    }
}

impl fmt::Display for SimdExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimdExtension::None => "none",
            SimdExtension::Sse => "sse",
            SimdExtension::Avx => "avx",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LaneConfig {
    pub simd: SimdExtension,
    pub fma: bool,
}

impl LaneConfig {
    /// Checks that the combination can be built.
    ///
    /// 256-bit lanes are only supported together with a hardware FMA.
    pub const fn check(self) -> Result<(), UnsupportedConfig> {
        match (self.simd, self.fma) {
            (SimdExtension::Avx, false) => Err(UnsupportedConfig(self)),
            _ => Ok(()),
        }
    }

    pub const fn float_lanes(self) -> usize {
        self.simd.float_lanes()
    }

    pub const fn double_lanes(self) -> usize {
        self.simd.double_lanes()
    }
}

impl fmt::Display for LaneConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "simd={} (floatx={}, doublex={}), fma={}",
            self.simd,
            self.float_lanes(),
            self.double_lanes(),
            if self.fma { "hardware" } else { "split" },
        )
    }
}

/// Configuration chosen for this build.
pub const ACTIVE: LaneConfig = LaneConfig {
    simd: if cfg!(tfcp_simd = "avx") {
        SimdExtension::Avx
    } else if cfg!(tfcp_simd = "sse") {
        SimdExtension::Sse
    } else {
        SimdExtension::None
    },
    fma: cfg!(tfcp_fma),
};

const _: () = assert!(ACTIVE.check().is_ok());
const _: () = assert!(ACTIVE.float_lanes() == <crate::Floatx as crate::Lane>::LANES);
const _: () = assert!(ACTIVE.double_lanes() == <crate::Doublex as crate::Lane>::LANES);

/// Returns the active configuration, logging it at debug level.
pub fn report() -> LaneConfig {
    log::debug!("twofold lane configuration: {ACTIVE}");
    ACTIVE
}

/// Error returned by [`LaneConfig::check`] for a combination that cannot be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedConfig(pub LaneConfig);

impl fmt::Display for UnsupportedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported lane configuration ({}): {}-bit lanes require a hardware FMA",
            self.0,
            self.0.simd.register_bits(),
        )
    }
}

impl std::error::Error for UnsupportedConfig {}
