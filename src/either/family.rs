//! Generator for the tagged-union family.
//!
//! `either_family!` emits one enum plus its combinators. Whole-value
//! operations (`as_ref`, `fold`, `fold_async`, `perform`) are emitted once;
//! per-arm operations are emitted by walking the arm list, carrying the arms
//! already visited on the left and the remaining ones on the right so every
//! other arm can be passed through unchanged.

macro_rules! either_family {
    (@arms $name:ident [$($bv:ident $bty:ident),*]) => {};
    (@arms $name:ident [$($bv:ident $bty:ident),*] $sel:ident $sty:ident $(, $av:ident $aty:ident)*) => {
        either_family!(@arm $name [$($bv $bty),*] $sel $sty [$($av $aty),*]);
        either_family!(@arms $name [$($bv $bty,)* $sel $sty] $($av $aty),*);
    };
    (@arm $name:ident [$($bv:ident $bty:ident),*] $sel:ident $sty:ident [$($av:ident $aty:ident),*]) => {
        paste::paste! {
            impl<$($bty,)* $sty $(, $aty)*> $name<$($bty,)* $sty $(, $aty)*> {
                #[doc = concat!("Creates the `", stringify!($sel), "` arm.")]
                #[inline]
                pub fn [<$sel:snake>](value: $sty) -> Self {
                    Self::$sel(value)
                }

                #[doc = concat!("Returns `true` when the `", stringify!($sel), "` arm is selected.")]
                #[must_use]
                #[inline]
                pub fn [<is_ $sel:snake>](&self) -> bool {
                    matches!(self, Self::$sel(_))
                }

                #[doc = concat!("Transforms the `", stringify!($sel), "` payload; every other arm passes through.")]
                #[inline]
                pub fn [<map_ $sel:snake>]<U, F>(self, f: F) -> $name<$($bty,)* U $(, $aty)*>
                where
                    F: FnOnce($sty) -> U,
                {
                    match self {
                        $(Self::$bv(v) => $name::$bv(v),)*
                        Self::$sel(v) => $name::$sel(f(v)),
                        $(Self::$av(v) => $name::$av(v),)*
                    }
                }

                #[doc = concat!("Async variant of mapping the `", stringify!($sel), "` payload.")]
                pub async fn [<map_ $sel:snake _async>]<U, F, Fut>(self, f: F) -> $name<$($bty,)* U $(, $aty)*>
                where
                    F: FnOnce($sty) -> Fut,
                    Fut: core::future::Future<Output = U>,
                {
                    match self {
                        $(Self::$bv(v) => $name::$bv(v),)*
                        Self::$sel(v) => $name::$sel(f(v).await),
                        $(Self::$av(v) => $name::$av(v),)*
                    }
                }

                #[doc = concat!("Chains on the `", stringify!($sel), "` payload; every other arm short-circuits unchanged.")]
                #[inline]
                pub fn [<and_then_ $sel:snake>]<U, F>(self, f: F) -> $name<$($bty,)* U $(, $aty)*>
                where
                    F: FnOnce($sty) -> $name<$($bty,)* U $(, $aty)*>,
                {
                    match self {
                        $(Self::$bv(v) => $name::$bv(v),)*
                        Self::$sel(v) => f(v),
                        $(Self::$av(v) => $name::$av(v),)*
                    }
                }

                #[doc = concat!("Async variant of chaining on the `", stringify!($sel), "` payload.")]
                pub async fn [<and_then_ $sel:snake _async>]<U, F, Fut>(self, f: F) -> $name<$($bty,)* U $(, $aty)*>
                where
                    F: FnOnce($sty) -> Fut,
                    Fut: core::future::Future<Output = $name<$($bty,)* U $(, $aty)*>>,
                {
                    match self {
                        $(Self::$bv(v) => $name::$bv(v),)*
                        Self::$sel(v) => f(v).await,
                        $(Self::$av(v) => $name::$av(v),)*
                    }
                }

                #[doc = concat!("Runs `f` on the `", stringify!($sel), "` payload for its side effect; returns `self` unchanged.")]
                #[inline]
                pub fn [<on_ $sel:snake>]<Out, F>(self, f: F) -> Self
                where
                    F: FnOnce(&$sty) -> Out,
                {
                    if let Self::$sel(v) = &self {
                        f(v);
                    }
                    self
                }

                #[doc = concat!("Async variant of observing the `", stringify!($sel), "` payload.")]
                pub async fn [<on_ $sel:snake _async>]<F, Fut>(self, f: F) -> Self
                where
                    F: FnOnce(&$sty) -> Fut,
                    Fut: core::future::Future,
                {
                    if let Self::$sel(v) = &self {
                        f(v).await;
                    }
                    self
                }

                #[doc = concat!("Keeps the `", stringify!($sel), "` payload and drops every other arm.")]
                #[inline]
                pub fn [<to_maybe_ $sel:snake>](self) -> $crate::maybe::Maybe<$sty> {
                    match self {
                        Self::$sel(v) => $crate::maybe::Maybe::Some(v),
                        _ => $crate::maybe::Maybe::None,
                    }
                }
            }
        }
    };
    ($(#[$meta:meta])* $name:ident { $($variant:ident($ty:ident)),+ $(,)? }) => {
        $(#[$meta])*
        #[must_use]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
        pub enum $name<$($ty),+> {
            $($variant($ty)),+
        }

        paste::paste! {
            impl<$($ty),+> $name<$($ty),+> {
                /// Borrows whichever payload is present.
                #[inline]
                pub fn as_ref(&self) -> $name<$(&$ty),+> {
                    match self {
                        $(Self::$variant(v) => $name::$variant(v),)+
                    }
                }

                /// Eliminates the union by calling exactly one handler, the one of the selected arm.
                #[inline]
                pub fn fold<U, $([<On $variant>]),+>(self, $([<on_ $variant:snake>]: [<On $variant>]),+) -> U
                where
                    $([<On $variant>]: FnOnce($ty) -> U),+
                {
                    match self {
                        $(Self::$variant(v) => [<on_ $variant:snake>](v),)+
                    }
                }

                /// Async counterpart of [`fold`](Self::fold); only the selected handler is called and awaited.
                pub async fn fold_async<U, $([<On $variant>], [<$variant Fut>]),+>(
                    self,
                    $([<on_ $variant:snake>]: [<On $variant>]),+
                ) -> U
                where
                    $(
                        [<On $variant>]: FnOnce($ty) -> [<$variant Fut>],
                        [<$variant Fut>]: core::future::Future<Output = U>
                    ),+
                {
                    match self {
                        $(Self::$variant(v) => [<on_ $variant:snake>](v).await,)+
                    }
                }

                /// Runs the handler of the selected arm, if one was given; returns `self` unchanged.
                ///
                /// Pass [`Skip`](crate::Skip) for arms that need no handler.
                #[inline]
                pub fn perform<$([<On $variant>]),+>(self, $([<on_ $variant:snake>]: [<On $variant>]),+) -> Self
                where
                    $([<On $variant>]: $crate::traits::Observer<$ty>),+
                {
                    match &self {
                        $(Self::$variant(v) => $crate::traits::Observer::observe([<on_ $variant:snake>], v),)+
                    }
                    self
                }
            }
        }

        either_family!(@arms $name [] $($variant $ty),+);
    };
}
