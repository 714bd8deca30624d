// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Enumerations and option sets of the DI information model.

use std::io::{Read, Write};

use opcua_types::{
    write_u32, BinaryDecodable, BinaryEncodable, Context, EncodingResult, Error, UaEnum,
    UaNullable,
};

// Encodes as the integer value in binary and JSON, and as `Name_Value` text in XML.
macro_rules! ua_enum {
    ($name:ident : $repr:ty, default $default:ident, { $($variant:ident = $value:literal),* $(,)? }) => {
        impl From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value as $repr
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = Error;

            fn try_from(value: $repr) -> Result<Self, Error> {
                Ok(match value {
                    $($value => Self::$variant,)*
                    r => {
                        return Err(Error::decoding(format!(
                            concat!("Got unexpected value for enum ", stringify!($name), ": {}"),
                            r
                        )))
                    }
                })
            }
        }

        impl UaEnum for $name {
            type Repr = $repr;

            fn from_repr(repr: Self::Repr) -> Result<Self, Error> {
                Self::try_from(repr)
            }

            fn into_repr(self) -> Self::Repr {
                self.into()
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => concat!(stringify!($variant), "_", stringify!($value)),)*
                }
            }

            fn from_str(val: &str) -> Result<Self, Error> {
                Ok(match val {
                    $(concat!(stringify!($variant), "_", stringify!($value)) => Self::$variant,)*
                    r => {
                        return Err(Error::decoding(format!(
                            concat!("Got unexpected value for enum ", stringify!($name), ": {}"),
                            r
                        )))
                    }
                })
            }
        }

        impl UaNullable for $name {}

        impl BinaryEncodable for $name {
            fn byte_len(&self, ctx: &Context<'_>) -> usize {
                (*self as $repr).byte_len(ctx)
            }

            fn encode<S: Write + ?Sized>(
                &self,
                stream: &mut S,
                ctx: &Context<'_>,
            ) -> EncodingResult<()> {
                (*self as $repr).encode(stream, ctx)
            }
        }

        impl BinaryDecodable for $name {
            fn decode<S: Read + ?Sized>(stream: &mut S, ctx: &Context<'_>) -> EncodingResult<Self> {
                let val = <$repr>::decode(stream, ctx)?;
                Self::try_from(val)
            }
        }

        #[cfg(feature = "xml")]
        impl opcua_types::xml::XmlType for $name {
            const TAG: &'static str = stringify!($name);
        }

        #[cfg(feature = "xml")]
        impl opcua_types::xml::XmlEncodable for $name {
            fn encode(
                &self,
                writer: &mut opcua_types::xml::XmlStreamWriter<&mut dyn Write>,
                _ctx: &Context<'_>,
            ) -> EncodingResult<()> {
                writer.write_text(self.as_str())?;
                Ok(())
            }
        }

        #[cfg(feature = "xml")]
        impl opcua_types::xml::XmlDecodable for $name {
            fn decode(
                read: &mut opcua_types::xml::XmlStreamReader<&mut dyn Read>,
                _ctx: &Context<'_>,
            ) -> EncodingResult<Self> {
                let val = read.consume_as_text()?;
                <Self as UaEnum>::from_str(val.trim())
            }
        }

        #[cfg(feature = "json")]
        impl opcua_types::json::JsonEncodable for $name {
            fn encode(
                &self,
                stream: &mut opcua_types::json::JsonStreamWriter<&mut dyn Write>,
                ctx: &Context<'_>,
            ) -> EncodingResult<()> {
                opcua_types::json::JsonEncodable::encode(&(*self as $repr), stream, ctx)
            }
        }

        #[cfg(feature = "json")]
        impl opcua_types::json::JsonDecodable for $name {
            fn decode(
                stream: &mut opcua_types::json::JsonStreamReader<&mut dyn Read>,
                ctx: &Context<'_>,
            ) -> EncodingResult<Self> {
                let val = <$repr as opcua_types::json::JsonDecodable>::decode(stream, ctx)?;
                Self::try_from(val)
            }
        }
    };
}

/// Health of a device, following NAMUR NE 107.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DeviceHealthEnumeration {
    /// The device functions normally.
    NORMAL = 0,
    /// Malfunction of the device or any of its peripherals.
    FAILURE = 1,
    /// Functional checks are currently performed.
    CHECK_FUNCTION = 2,
    /// The device operates outside its specified range.
    OFF_SPEC = 3,
    /// The device is still working, but requires maintenance soon.
    MAINTENANCE_REQUIRED = 4,
}

ua_enum!(DeviceHealthEnumeration: i32, default NORMAL, {
    NORMAL = 0,
    FAILURE = 1,
    CHECK_FUNCTION = 2,
    OFF_SPEC = 3,
    MAINTENANCE_REQUIRED = 4,
});

/// Kind of software file exposed by a software update.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SoftwareVersionFileType {
    /// The software currently installed.
    Current = 0,
    /// The software that will be installed next.
    Pending = 1,
    /// The software used as fallback.
    Fallback = 2,
}

ua_enum!(SoftwareVersionFileType: i32, default Current, {
    Current = 0,
    Pending = 1,
    Fallback = 2,
});

bitflags::bitflags! {
    /// Effects of installing a software update on the device.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct UpdateBehavior: u32 {
        /// Parameters are kept during the update.
        const KeepsParameters = 1;
        /// The device disconnects from the server during the update.
        const WillDisconnect = 2;
        /// A power cycle is needed to finish the update.
        const RequiresPowerCycle = 4;
        /// The device reboots during the update.
        const WillReboot = 8;
    }
}

impl UaNullable for UpdateBehavior {
    fn is_ua_null(&self) -> bool {
        self.is_empty()
    }
}

impl BinaryEncodable for UpdateBehavior {
    fn byte_len(&self, _ctx: &Context<'_>) -> usize {
        4
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S, _ctx: &Context<'_>) -> EncodingResult<()> {
        write_u32(stream, self.bits())
    }
}

impl BinaryDecodable for UpdateBehavior {
    fn decode<S: Read + ?Sized>(stream: &mut S, ctx: &Context<'_>) -> EncodingResult<Self> {
        Ok(Self::from_bits_truncate(u32::decode(stream, ctx)?))
    }
}

impl Default for UpdateBehavior {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "xml")]
mod xml {
    use std::io::{Read, Write};

    use opcua_types::{xml::*, EncodingResult};

    use super::UpdateBehavior;

    impl XmlType for UpdateBehavior {
        const TAG: &'static str = "UpdateBehavior";
    }

    impl XmlEncodable for UpdateBehavior {
        fn encode(
            &self,
            writer: &mut XmlStreamWriter<&mut dyn Write>,
            ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            self.bits().encode(writer, ctx)
        }
    }

    impl XmlDecodable for UpdateBehavior {
        fn decode(
            read: &mut XmlStreamReader<&mut dyn Read>,
            ctx: &Context<'_>,
        ) -> EncodingResult<Self> {
            Ok(Self::from_bits_truncate(u32::decode(read, ctx)?))
        }
    }
}

#[cfg(feature = "json")]
mod json {
    use std::io::{Read, Write};

    use opcua_types::{json::*, EncodingResult};

    use super::UpdateBehavior;

    impl JsonEncodable for UpdateBehavior {
        fn encode(
            &self,
            stream: &mut JsonStreamWriter<&mut dyn Write>,
            _ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            stream.number_value(self.bits())?;
            Ok(())
        }
    }

    impl JsonDecodable for UpdateBehavior {
        fn decode(
            stream: &mut JsonStreamReader<&mut dyn Read>,
            _ctx: &Context<'_>,
        ) -> EncodingResult<Self> {
            Ok(Self::from_bits_truncate(stream.next_number()??))
        }
    }
}

#[cfg(test)]
mod tests {
    use opcua_types::UaEnum;

    use super::{DeviceHealthEnumeration, SoftwareVersionFileType, UpdateBehavior};

    #[test]
    fn enum_strings() {
        assert_eq!(DeviceHealthEnumeration::CHECK_FUNCTION.as_str(), "CHECK_FUNCTION_2");
        assert_eq!(
            <DeviceHealthEnumeration as UaEnum>::from_str("MAINTENANCE_REQUIRED_4").unwrap(),
            DeviceHealthEnumeration::MAINTENANCE_REQUIRED
        );
        assert!(<DeviceHealthEnumeration as UaEnum>::from_str("MAINTENANCE_REQUIRED").is_err());
        assert_eq!(SoftwareVersionFileType::Fallback.as_str(), "Fallback_2");
    }

    #[test]
    fn enum_values() {
        assert_eq!(DeviceHealthEnumeration::default(), DeviceHealthEnumeration::NORMAL);
        assert_eq!(i32::from(DeviceHealthEnumeration::OFF_SPEC), 3);
        assert_eq!(
            SoftwareVersionFileType::from_repr(1).unwrap(),
            SoftwareVersionFileType::Pending
        );
        assert!(SoftwareVersionFileType::try_from(3).is_err());
        assert_eq!(SoftwareVersionFileType::Pending.into_repr(), 1);
    }

    #[test]
    fn option_set() {
        let behavior = UpdateBehavior::KeepsParameters | UpdateBehavior::WillReboot;
        assert_eq!(behavior.bits(), 9);
        assert_eq!(UpdateBehavior::from_bits_truncate(0xFF).bits(), 0x0F);
        assert_eq!(UpdateBehavior::default(), UpdateBehavior::empty());
    }
}
