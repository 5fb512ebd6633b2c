/*
* LED Blink Helper
*   Pin level and wait come from embedded-hal, so any HAL output pin
*   (or a test fake) can drive the pattern.
*/

use embedded_hal_1::delay::DelayNs;
use embedded_hal_1::digital::{OutputPin, PinState};
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;

/* --------------------------- Pattern -------------------------- */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pin high lights the LED.
    ActiveHigh,
    /// Pin low lights the LED.
    ActiveLow,
}

impl Polarity {
    pub fn lit(self) -> PinState {
        match self {
            Polarity::ActiveHigh => PinState::High,
            Polarity::ActiveLow => PinState::Low,
        }
    }

    pub fn unlit(self) -> PinState {
        match self {
            Polarity::ActiveHigh => PinState::Low,
            Polarity::ActiveLow => PinState::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkPattern {
    pub count: u16,
    pub on_ms: u32,
    /// Falls back to `on_ms` when unset.
    pub off_ms: Option<u32>,
    pub polarity: Polarity,
}

impl BlinkPattern {
    pub const fn new(count: u16, on_ms: u32) -> Self {
        Self {
            count,
            on_ms,
            off_ms: None,
            polarity: Polarity::ActiveHigh,
        }
    }

    pub const fn with_off_ms(mut self, off_ms: u32) -> Self {
        self.off_ms = Some(off_ms);
        self
    }

    pub const fn reversed(mut self) -> Self {
        self.polarity = Polarity::ActiveLow;
        self
    }

    pub fn off_duration_ms(&self) -> u32 {
        self.off_ms.unwrap_or(self.on_ms)
    }
}

/* --------------------------- Code -------------------------- */
pub fn blink<P, D>(pin: &mut P, delay: &mut D, pattern: &BlinkPattern) -> Result<(), P::Error>
where
    P: OutputPin,
    D: DelayNs,
{
    for _ in 0..pattern.count {
        pin.set_state(pattern.polarity.lit())?;
        delay.delay_ms(pattern.on_ms);
        pin.set_state(pattern.polarity.unlit())?;
        delay.delay_ms(pattern.off_duration_ms());
    }

    Ok(())
}

pub async fn blink_async<P, D>(pin: &mut P, delay: &mut D, pattern: &BlinkPattern) -> Result<(), P::Error>
where
    P: OutputPin,
    D: AsyncDelayNs,
{
    for _ in 0..pattern.count {
        pin.set_state(pattern.polarity.lit())?;
        delay.delay_ms(pattern.on_ms).await;
        pin.set_state(pattern.polarity.unlit())?;
        delay.delay_ms(pattern.off_duration_ms()).await;
    }

    Ok(())
}

pub struct StatusLed<P> {
    pin: P,
    polarity: Polarity,
    lit: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Takes the pin and drives it to the unlit level.
    pub fn new(mut pin: P, polarity: Polarity) -> Result<Self, P::Error> {
        pin.set_state(polarity.unlit())?;
        Ok(Self { pin, polarity, lit: false })
    }

    pub fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(self.polarity.lit())?;
        self.lit = true;
        Ok(())
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(self.polarity.unlit())?;
        self.lit = false;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<(), P::Error> {
        if self.lit {
            self.off()
        }
        else {
            self.on()
        }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn blink<D: DelayNs>(&mut self, delay: &mut D, count: u16, on_ms: u32, off_ms: Option<u32>) -> Result<(), P::Error> {
        let pattern = self.pattern(count, on_ms, off_ms);
        blink(&mut self.pin, delay, &pattern)?;
        self.lit = false;
        Ok(())
    }

    pub async fn blink_async<D: AsyncDelayNs>(&mut self, delay: &mut D, count: u16, on_ms: u32, off_ms: Option<u32>) -> Result<(), P::Error> {
        let pattern = self.pattern(count, on_ms, off_ms);
        blink_async(&mut self.pin, delay, &pattern).await?;
        self.lit = false;
        Ok(())
    }

    pub fn release(self) -> P {
        self.pin
    }

    fn pattern(&self, count: u16, on_ms: u32, off_ms: Option<u32>) -> BlinkPattern {
        BlinkPattern { count, on_ms, off_ms, polarity: self.polarity }
    }
}
