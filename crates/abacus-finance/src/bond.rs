//! Bond pricing.

use crate::tvm::ZERO_RATE_THRESHOLD;

/// Price of a bond paying semiannual coupons.
///
/// `coupon_rate` and `yield_rate` are annual percentages. Coupons of
/// `face · coupon_rate / 200` are paid on `years · 2` dates and discounted at
/// half the annual yield, together with the face value at maturity. The
/// coupon stream is summed in closed form, so very long maturities cost the
/// same as short ones and approach the perpetuity value `coupon / y`.
///
/// ```rust
/// use abacus_finance::bond::bond_price;
///
/// // a 6% bond yielding 8% trades below par
/// let price = bond_price(1000.0, 6.0, 8.0, 10);
/// assert!((price - 864.10).abs() < 0.01);
/// ```
pub fn bond_price(face: f64, coupon_rate: f64, yield_rate: f64, years: u32) -> f64 {
    let coupon = face * coupon_rate / 100.0 / 2.0;
    let y = yield_rate / 100.0 / 2.0;
    let dates = f64::from(years) * 2.0;

    if y.abs() < ZERO_RATE_THRESHOLD {
        return coupon * dates + face;
    }
    let discount = (1.0 + y).powf(-dates);
    coupon * (1.0 - discount) / y + face * discount
}
