// pn532-ntag/src/transport/linux_i2c.rs
//! `/dev/i2c-*` backend for [`I2cTransport`](super::i2c::I2cTransport).

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

use crate::constants::PN532_I2C_ADDRESS;
use crate::transport::i2c::I2cBus;
use crate::Result;

pub struct LinuxI2cBus {
    device: LinuxI2CDevice,
    address: u16,
}

impl LinuxI2cBus {
    /// Open the adapter at `path` (e.g. `/dev/i2c-1`) addressed to the PN532.
    pub fn open(path: &str) -> Result<Self> {
        let device = LinuxI2CDevice::new(path, PN532_I2C_ADDRESS)?;
        Ok(Self {
            device,
            address: PN532_I2C_ADDRESS,
        })
    }

    fn select(&mut self, address: u16) -> Result<()> {
        if address != self.address {
            self.device.set_slave_address(address)?;
            self.address = address;
        }
        Ok(())
    }
}

impl I2cBus for LinuxI2cBus {
    fn write(&mut self, address: u16, data: &[u8]) -> Result<()> {
        self.select(address)?;
        self.device.write(data)?;
        Ok(())
    }

    fn read(&mut self, address: u16, buf: &mut [u8]) -> Result<()> {
        self.select(address)?;
        self.device.read(buf)?;
        Ok(())
    }
}
