/*
    Resource Allocation Module
*/

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals;
use embassy_rp::adc::InterruptHandler as AdcInterruptHandler;
use embassy_rp::usb::InterruptHandler as UsbInterruptHandler;

assign_resources! {
    led_resources: LedResources {
        LED_PIN: PIN_25,
    },

    sensor_resources: SensorResources {
        ADC_UNIT: ADC,
        SENSOR_PIN: PIN_26,
    },
}

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    USBCTRL_IRQ => UsbInterruptHandler<peripherals::USB>;
});
