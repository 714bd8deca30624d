// This file was autogenerated from schemas/NodeIds.csv by opcua-di-codegen
//
// DO NOT EDIT THIS FILE

// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

/// Identifiers of DataType nodes in the namespace `http://opcfoundation.org/UA/DI/`.
#[allow(non_camel_case_types, clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[repr(u32)]
pub enum DataTypeId {
    DeviceHealthEnumeration = 6244u32,
    FetchResultDataType = 6522u32,
    ParameterResultDataType = 6525u32,
    TransferResultErrorDataType = 15888u32,
    TransferResultDataDataType = 15889u32,
    SoftwareVersionFileType = 331u32,
    UpdateBehavior = 333u32,
}
impl crate::IdentifierTable for DataTypeId {
    const NAMESPACE_URI: &'static str = crate::DI_NAMESPACE_URI;
    const ALL: &'static [Self] = &[
        Self::DeviceHealthEnumeration,
        Self::FetchResultDataType,
        Self::ParameterResultDataType,
        Self::TransferResultErrorDataType,
        Self::TransferResultDataDataType,
        Self::SoftwareVersionFileType,
        Self::UpdateBehavior,
    ];
    fn id(&self) -> u32 {
        *self as u32
    }
    fn name(&self) -> &'static str {
        match self {
            Self::DeviceHealthEnumeration => "DeviceHealthEnumeration",
            Self::FetchResultDataType => "FetchResultDataType",
            Self::ParameterResultDataType => "ParameterResultDataType",
            Self::TransferResultErrorDataType => "TransferResultErrorDataType",
            Self::TransferResultDataDataType => "TransferResultDataDataType",
            Self::SoftwareVersionFileType => "SoftwareVersionFileType",
            Self::UpdateBehavior => "UpdateBehavior",
        }
    }
}
impl<'a> From<&'a DataTypeId> for opcua_types::ExpandedNodeId {
    fn from(r: &'a DataTypeId) -> Self {
        crate::IdentifierTable::expanded_node_id(r)
    }
}
impl From<DataTypeId> for opcua_types::ExpandedNodeId {
    fn from(r: DataTypeId) -> Self {
        crate::IdentifierTable::expanded_node_id(&r)
    }
}
impl TryFrom<u32> for DataTypeId {
    type Error = ();
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(
            match value {
                6244u32 => Self::DeviceHealthEnumeration,
                6522u32 => Self::FetchResultDataType,
                6525u32 => Self::ParameterResultDataType,
                15888u32 => Self::TransferResultErrorDataType,
                15889u32 => Self::TransferResultDataDataType,
                331u32 => Self::SoftwareVersionFileType,
                333u32 => Self::UpdateBehavior,
                _ => return Err(()),
            },
        )
    }
}
impl<'a> TryFrom<&'a str> for DataTypeId {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(
            match value {
                "DeviceHealthEnumeration" => Self::DeviceHealthEnumeration,
                "FetchResultDataType" => Self::FetchResultDataType,
                "ParameterResultDataType" => Self::ParameterResultDataType,
                "TransferResultErrorDataType" => Self::TransferResultErrorDataType,
                "TransferResultDataDataType" => Self::TransferResultDataDataType,
                "SoftwareVersionFileType" => Self::SoftwareVersionFileType,
                "UpdateBehavior" => Self::UpdateBehavior,
                _ => return Err(()),
            },
        )
    }
}
/// Identifiers of Method nodes in the namespace `http://opcfoundation.org/UA/DI/`.
#[allow(non_camel_case_types, clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[repr(u32)]
pub enum MethodId {
    TopologyElementType_Lock_InitLock = 6166u32,
    TopologyElementType_Lock_RenewLock = 6169u32,
    TopologyElementType_Lock_ExitLock = 6171u32,
    TopologyElementType_Lock_BreakLock = 6173u32,
    LockingServicesType_InitLock = 6393u32,
    LockingServicesType_RenewLock = 6396u32,
    LockingServicesType_ExitLock = 6398u32,
    LockingServicesType_BreakLock = 6400u32,
    TransferServicesType_TransferToDevice = 6527u32,
    TransferServicesType_TransferFromDevice = 6529u32,
    TransferServicesType_FetchTransferResultData = 6531u32,
}
impl crate::IdentifierTable for MethodId {
    const NAMESPACE_URI: &'static str = crate::DI_NAMESPACE_URI;
    const ALL: &'static [Self] = &[
        Self::TopologyElementType_Lock_InitLock,
        Self::TopologyElementType_Lock_RenewLock,
        Self::TopologyElementType_Lock_ExitLock,
        Self::TopologyElementType_Lock_BreakLock,
        Self::LockingServicesType_InitLock,
        Self::LockingServicesType_RenewLock,
        Self::LockingServicesType_ExitLock,
        Self::LockingServicesType_BreakLock,
        Self::TransferServicesType_TransferToDevice,
        Self::TransferServicesType_TransferFromDevice,
        Self::TransferServicesType_FetchTransferResultData,
    ];
    fn id(&self) -> u32 {
        *self as u32
    }
    fn name(&self) -> &'static str {
        match self {
            Self::TopologyElementType_Lock_InitLock => "TopologyElementType_Lock_InitLock",
            Self::TopologyElementType_Lock_RenewLock => "TopologyElementType_Lock_RenewLock",
            Self::TopologyElementType_Lock_ExitLock => "TopologyElementType_Lock_ExitLock",
            Self::TopologyElementType_Lock_BreakLock => "TopologyElementType_Lock_BreakLock",
            Self::LockingServicesType_InitLock => "LockingServicesType_InitLock",
            Self::LockingServicesType_RenewLock => "LockingServicesType_RenewLock",
            Self::LockingServicesType_ExitLock => "LockingServicesType_ExitLock",
            Self::LockingServicesType_BreakLock => "LockingServicesType_BreakLock",
            Self::TransferServicesType_TransferToDevice => "TransferServicesType_TransferToDevice",
            Self::TransferServicesType_TransferFromDevice => "TransferServicesType_TransferFromDevice",
            Self::TransferServicesType_FetchTransferResultData => "TransferServicesType_FetchTransferResultData",
        }
    }
}
impl<'a> From<&'a MethodId> for opcua_types::ExpandedNodeId {
    fn from(r: &'a MethodId) -> Self {
        crate::IdentifierTable::expanded_node_id(r)
    }
}
impl From<MethodId> for opcua_types::ExpandedNodeId {
    fn from(r: MethodId) -> Self {
        crate::IdentifierTable::expanded_node_id(&r)
    }
}
impl TryFrom<u32> for MethodId {
    type Error = ();
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(
            match value {
                6166u32 => Self::TopologyElementType_Lock_InitLock,
                6169u32 => Self::TopologyElementType_Lock_RenewLock,
                6171u32 => Self::TopologyElementType_Lock_ExitLock,
                6173u32 => Self::TopologyElementType_Lock_BreakLock,
                6393u32 => Self::LockingServicesType_InitLock,
                6396u32 => Self::LockingServicesType_RenewLock,
                6398u32 => Self::LockingServicesType_ExitLock,
                6400u32 => Self::LockingServicesType_BreakLock,
                6527u32 => Self::TransferServicesType_TransferToDevice,
                6529u32 => Self::TransferServicesType_TransferFromDevice,
                6531u32 => Self::TransferServicesType_FetchTransferResultData,
                _ => return Err(()),
            },
        )
    }
}
impl<'a> TryFrom<&'a str> for MethodId {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(
            match value {
                "TopologyElementType_Lock_InitLock" => Self::TopologyElementType_Lock_InitLock,
                "TopologyElementType_Lock_RenewLock" => Self::TopologyElementType_Lock_RenewLock,
                "TopologyElementType_Lock_ExitLock" => Self::TopologyElementType_Lock_ExitLock,
                "TopologyElementType_Lock_BreakLock" => Self::TopologyElementType_Lock_BreakLock,
                "LockingServicesType_InitLock" => Self::LockingServicesType_InitLock,
                "LockingServicesType_RenewLock" => Self::LockingServicesType_RenewLock,
                "LockingServicesType_ExitLock" => Self::LockingServicesType_ExitLock,
                "LockingServicesType_BreakLock" => Self::LockingServicesType_BreakLock,
                "TransferServicesType_TransferToDevice" => Self::TransferServicesType_TransferToDevice,
                "TransferServicesType_TransferFromDevice" => Self::TransferServicesType_TransferFromDevice,
                "TransferServicesType_FetchTransferResultData" => Self::TransferServicesType_FetchTransferResultData,
                _ => return Err(()),
            },
        )
    }
}
/// Identifiers of Object nodes in the namespace `http://opcfoundation.org/UA/DI/`.
#[allow(non_camel_case_types, clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[repr(u32)]
pub enum ObjectId {
    DeviceSet = 5001u32,
    TopologyElementType_ParameterSet = 5002u32,
    TopologyElementType_MethodSet = 5003u32,
    ConfigurableObjectType_SupportedTypes = 5004u32,
    ConfigurableObjectType_ObjectIdentifier = 6026u32,
    FunctionalGroupType_GroupIdentifier = 6027u32,
    TopologyElementType_Identification = 6014u32,
    NetworkSet = 6078u32,
    DeviceTopology = 6094u32,
    TopologyElementType_Lock = 6161u32,
    TopologyElementType_GroupIdentifier = 6567u32,
    DeviceType_DeviceTypeImage = 6209u32,
    DeviceType_Documentation = 6211u32,
    DeviceType_ProtocolSupport = 6213u32,
    DeviceType_ImageSet = 6215u32,
    NetworkType_ProfileIdentifier = 6248u32,
    NetworkType_CPIdentifier = 6292u32,
    NetworkType_Lock = 6294u32,
    ConnectionPointType_NetworkAddress = 6354u32,
    FetchResultDataType_Encoding_DefaultXml = 6535u32,
    ParameterResultDataType_Encoding_DefaultXml = 6538u32,
    FetchResultDataType_Encoding_DefaultBinary = 6551u32,
    ParameterResultDataType_Encoding_DefaultBinary = 6554u32,
    OPCUADINamespaceMetadata = 15001u32,
    DeviceFeatures = 15034u32,
    IDeviceHealthType_DeviceHealthAlarms = 15053u32,
    ISupportInfoType_DeviceTypeImage = 15055u32,
    ISupportInfoType_Documentation = 15057u32,
    ISupportInfoType_ProtocolSupport = 15059u32,
    ISupportInfoType_ImageSet = 15061u32,
    TransferResultErrorDataType_Encoding_DefaultBinary = 15891u32,
    TransferResultDataDataType_Encoding_DefaultBinary = 15892u32,
    TransferResultErrorDataType_Encoding_DefaultXml = 15900u32,
    TransferResultDataDataType_Encoding_DefaultXml = 15901u32,
    FetchResultDataType_Encoding_DefaultJson = 15909u32,
    TransferResultErrorDataType_Encoding_DefaultJson = 15910u32,
    TransferResultDataDataType_Encoding_DefaultJson = 15911u32,
    ParameterResultDataType_Encoding_DefaultJson = 15912u32,
}
impl crate::IdentifierTable for ObjectId {
    const NAMESPACE_URI: &'static str = crate::DI_NAMESPACE_URI;
    const ALL: &'static [Self] = &[
        Self::DeviceSet,
        Self::TopologyElementType_ParameterSet,
        Self::TopologyElementType_MethodSet,
        Self::ConfigurableObjectType_SupportedTypes,
        Self::ConfigurableObjectType_ObjectIdentifier,
        Self::FunctionalGroupType_GroupIdentifier,
        Self::TopologyElementType_Identification,
        Self::NetworkSet,
        Self::DeviceTopology,
        Self::TopologyElementType_Lock,
        Self::TopologyElementType_GroupIdentifier,
        Self::DeviceType_DeviceTypeImage,
        Self::DeviceType_Documentation,
        Self::DeviceType_ProtocolSupport,
        Self::DeviceType_ImageSet,
        Self::NetworkType_ProfileIdentifier,
        Self::NetworkType_CPIdentifier,
        Self::NetworkType_Lock,
        Self::ConnectionPointType_NetworkAddress,
        Self::FetchResultDataType_Encoding_DefaultXml,
        Self::ParameterResultDataType_Encoding_DefaultXml,
        Self::FetchResultDataType_Encoding_DefaultBinary,
        Self::ParameterResultDataType_Encoding_DefaultBinary,
        Self::OPCUADINamespaceMetadata,
        Self::DeviceFeatures,
        Self::IDeviceHealthType_DeviceHealthAlarms,
        Self::ISupportInfoType_DeviceTypeImage,
        Self::ISupportInfoType_Documentation,
        Self::ISupportInfoType_ProtocolSupport,
        Self::ISupportInfoType_ImageSet,
        Self::TransferResultErrorDataType_Encoding_DefaultBinary,
        Self::TransferResultDataDataType_Encoding_DefaultBinary,
        Self::TransferResultErrorDataType_Encoding_DefaultXml,
        Self::TransferResultDataDataType_Encoding_DefaultXml,
        Self::FetchResultDataType_Encoding_DefaultJson,
        Self::TransferResultErrorDataType_Encoding_DefaultJson,
        Self::TransferResultDataDataType_Encoding_DefaultJson,
        Self::ParameterResultDataType_Encoding_DefaultJson,
    ];
    fn id(&self) -> u32 {
        *self as u32
    }
    fn name(&self) -> &'static str {
        match self {
            Self::DeviceSet => "DeviceSet",
            Self::TopologyElementType_ParameterSet => "TopologyElementType_ParameterSet",
            Self::TopologyElementType_MethodSet => "TopologyElementType_MethodSet",
            Self::ConfigurableObjectType_SupportedTypes => "ConfigurableObjectType_SupportedTypes",
            Self::ConfigurableObjectType_ObjectIdentifier => "ConfigurableObjectType_ObjectIdentifier",
            Self::FunctionalGroupType_GroupIdentifier => "FunctionalGroupType_GroupIdentifier",
            Self::TopologyElementType_Identification => "TopologyElementType_Identification",
            Self::NetworkSet => "NetworkSet",
            Self::DeviceTopology => "DeviceTopology",
            Self::TopologyElementType_Lock => "TopologyElementType_Lock",
            Self::TopologyElementType_GroupIdentifier => "TopologyElementType_GroupIdentifier",
            Self::DeviceType_DeviceTypeImage => "DeviceType_DeviceTypeImage",
            Self::DeviceType_Documentation => "DeviceType_Documentation",
            Self::DeviceType_ProtocolSupport => "DeviceType_ProtocolSupport",
            Self::DeviceType_ImageSet => "DeviceType_ImageSet",
            Self::NetworkType_ProfileIdentifier => "NetworkType_ProfileIdentifier",
            Self::NetworkType_CPIdentifier => "NetworkType_CPIdentifier",
            Self::NetworkType_Lock => "NetworkType_Lock",
            Self::ConnectionPointType_NetworkAddress => "ConnectionPointType_NetworkAddress",
            Self::FetchResultDataType_Encoding_DefaultXml => "FetchResultDataType_Encoding_DefaultXml",
            Self::ParameterResultDataType_Encoding_DefaultXml => "ParameterResultDataType_Encoding_DefaultXml",
            Self::FetchResultDataType_Encoding_DefaultBinary => "FetchResultDataType_Encoding_DefaultBinary",
            Self::ParameterResultDataType_Encoding_DefaultBinary => "ParameterResultDataType_Encoding_DefaultBinary",
            Self::OPCUADINamespaceMetadata => "OPCUADINamespaceMetadata",
            Self::DeviceFeatures => "DeviceFeatures",
            Self::IDeviceHealthType_DeviceHealthAlarms => "IDeviceHealthType_DeviceHealthAlarms",
            Self::ISupportInfoType_DeviceTypeImage => "ISupportInfoType_DeviceTypeImage",
            Self::ISupportInfoType_Documentation => "ISupportInfoType_Documentation",
            Self::ISupportInfoType_ProtocolSupport => "ISupportInfoType_ProtocolSupport",
            Self::ISupportInfoType_ImageSet => "ISupportInfoType_ImageSet",
            Self::TransferResultErrorDataType_Encoding_DefaultBinary => "TransferResultErrorDataType_Encoding_DefaultBinary",
            Self::TransferResultDataDataType_Encoding_DefaultBinary => "TransferResultDataDataType_Encoding_DefaultBinary",
            Self::TransferResultErrorDataType_Encoding_DefaultXml => "TransferResultErrorDataType_Encoding_DefaultXml",
            Self::TransferResultDataDataType_Encoding_DefaultXml => "TransferResultDataDataType_Encoding_DefaultXml",
            Self::FetchResultDataType_Encoding_DefaultJson => "FetchResultDataType_Encoding_DefaultJson",
            Self::TransferResultErrorDataType_Encoding_DefaultJson => "TransferResultErrorDataType_Encoding_DefaultJson",
            Self::TransferResultDataDataType_Encoding_DefaultJson => "TransferResultDataDataType_Encoding_DefaultJson",
            Self::ParameterResultDataType_Encoding_DefaultJson => "ParameterResultDataType_Encoding_DefaultJson",
        }
    }
}
impl<'a> From<&'a ObjectId> for opcua_types::ExpandedNodeId {
    fn from(r: &'a ObjectId) -> Self {
        crate::IdentifierTable::expanded_node_id(r)
    }
}
impl From<ObjectId> for opcua_types::ExpandedNodeId {
    fn from(r: ObjectId) -> Self {
        crate::IdentifierTable::expanded_node_id(&r)
    }
}
impl TryFrom<u32> for ObjectId {
    type Error = ();
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(
            match value {
                5001u32 => Self::DeviceSet,
                5002u32 => Self::TopologyElementType_ParameterSet,
                5003u32 => Self::TopologyElementType_MethodSet,
                5004u32 => Self::ConfigurableObjectType_SupportedTypes,
                6026u32 => Self::ConfigurableObjectType_ObjectIdentifier,
                6027u32 => Self::FunctionalGroupType_GroupIdentifier,
                6014u32 => Self::TopologyElementType_Identification,
                6078u32 => Self::NetworkSet,
                6094u32 => Self::DeviceTopology,
                6161u32 => Self::TopologyElementType_Lock,
                6567u32 => Self::TopologyElementType_GroupIdentifier,
                6209u32 => Self::DeviceType_DeviceTypeImage,
                6211u32 => Self::DeviceType_Documentation,
                6213u32 => Self::DeviceType_ProtocolSupport,
                6215u32 => Self::DeviceType_ImageSet,
                6248u32 => Self::NetworkType_ProfileIdentifier,
                6292u32 => Self::NetworkType_CPIdentifier,
                6294u32 => Self::NetworkType_Lock,
                6354u32 => Self::ConnectionPointType_NetworkAddress,
                6535u32 => Self::FetchResultDataType_Encoding_DefaultXml,
                6538u32 => Self::ParameterResultDataType_Encoding_DefaultXml,
                6551u32 => Self::FetchResultDataType_Encoding_DefaultBinary,
                6554u32 => Self::ParameterResultDataType_Encoding_DefaultBinary,
                15001u32 => Self::OPCUADINamespaceMetadata,
                15034u32 => Self::DeviceFeatures,
                15053u32 => Self::IDeviceHealthType_DeviceHealthAlarms,
                15055u32 => Self::ISupportInfoType_DeviceTypeImage,
                15057u32 => Self::ISupportInfoType_Documentation,
                15059u32 => Self::ISupportInfoType_ProtocolSupport,
                15061u32 => Self::ISupportInfoType_ImageSet,
                15891u32 => Self::TransferResultErrorDataType_Encoding_DefaultBinary,
                15892u32 => Self::TransferResultDataDataType_Encoding_DefaultBinary,
                15900u32 => Self::TransferResultErrorDataType_Encoding_DefaultXml,
                15901u32 => Self::TransferResultDataDataType_Encoding_DefaultXml,
                15909u32 => Self::FetchResultDataType_Encoding_DefaultJson,
                15910u32 => Self::TransferResultErrorDataType_Encoding_DefaultJson,
                15911u32 => Self::TransferResultDataDataType_Encoding_DefaultJson,
                15912u32 => Self::ParameterResultDataType_Encoding_DefaultJson,
                _ => return Err(()),
            },
        )
    }
}
impl<'a> TryFrom<&'a str> for ObjectId {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(
            match value {
                "DeviceSet" => Self::DeviceSet,
                "TopologyElementType_ParameterSet" => Self::TopologyElementType_ParameterSet,
                "TopologyElementType_MethodSet" => Self::TopologyElementType_MethodSet,
                "ConfigurableObjectType_SupportedTypes" => Self::ConfigurableObjectType_SupportedTypes,
                "ConfigurableObjectType_ObjectIdentifier" => Self::ConfigurableObjectType_ObjectIdentifier,
                "FunctionalGroupType_GroupIdentifier" => Self::FunctionalGroupType_GroupIdentifier,
                "TopologyElementType_Identification" => Self::TopologyElementType_Identification,
                "NetworkSet" => Self::NetworkSet,
                "DeviceTopology" => Self::DeviceTopology,
                "TopologyElementType_Lock" => Self::TopologyElementType_Lock,
                "TopologyElementType_GroupIdentifier" => Self::TopologyElementType_GroupIdentifier,
                "DeviceType_DeviceTypeImage" => Self::DeviceType_DeviceTypeImage,
                "DeviceType_Documentation" => Self::DeviceType_Documentation,
                "DeviceType_ProtocolSupport" => Self::DeviceType_ProtocolSupport,
                "DeviceType_ImageSet" => Self::DeviceType_ImageSet,
                "NetworkType_ProfileIdentifier" => Self::NetworkType_ProfileIdentifier,
                "NetworkType_CPIdentifier" => Self::NetworkType_CPIdentifier,
                "NetworkType_Lock" => Self::NetworkType_Lock,
                "ConnectionPointType_NetworkAddress" => Self::ConnectionPointType_NetworkAddress,
                "FetchResultDataType_Encoding_DefaultXml" => Self::FetchResultDataType_Encoding_DefaultXml,
                "ParameterResultDataType_Encoding_DefaultXml" => Self::ParameterResultDataType_Encoding_DefaultXml,
                "FetchResultDataType_Encoding_DefaultBinary" => Self::FetchResultDataType_Encoding_DefaultBinary,
                "ParameterResultDataType_Encoding_DefaultBinary" => Self::ParameterResultDataType_Encoding_DefaultBinary,
                "OPCUADINamespaceMetadata" => Self::OPCUADINamespaceMetadata,
                "DeviceFeatures" => Self::DeviceFeatures,
                "IDeviceHealthType_DeviceHealthAlarms" => Self::IDeviceHealthType_DeviceHealthAlarms,
                "ISupportInfoType_DeviceTypeImage" => Self::ISupportInfoType_DeviceTypeImage,
                "ISupportInfoType_Documentation" => Self::ISupportInfoType_Documentation,
                "ISupportInfoType_ProtocolSupport" => Self::ISupportInfoType_ProtocolSupport,
                "ISupportInfoType_ImageSet" => Self::ISupportInfoType_ImageSet,
                "TransferResultErrorDataType_Encoding_DefaultBinary" => Self::TransferResultErrorDataType_Encoding_DefaultBinary,
                "TransferResultDataDataType_Encoding_DefaultBinary" => Self::TransferResultDataDataType_Encoding_DefaultBinary,
                "TransferResultErrorDataType_Encoding_DefaultXml" => Self::TransferResultErrorDataType_Encoding_DefaultXml,
                "TransferResultDataDataType_Encoding_DefaultXml" => Self::TransferResultDataDataType_Encoding_DefaultXml,
                "FetchResultDataType_Encoding_DefaultJson" => Self::FetchResultDataType_Encoding_DefaultJson,
                "TransferResultErrorDataType_Encoding_DefaultJson" => Self::TransferResultErrorDataType_Encoding_DefaultJson,
                "TransferResultDataDataType_Encoding_DefaultJson" => Self::TransferResultDataDataType_Encoding_DefaultJson,
                "ParameterResultDataType_Encoding_DefaultJson" => Self::ParameterResultDataType_Encoding_DefaultJson,
                _ => return Err(()),
            },
        )
    }
}
/// Identifiers of ObjectType nodes in the namespace `http://opcfoundation.org/UA/DI/`.
#[allow(non_camel_case_types, clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[repr(u32)]
pub enum ObjectTypeId {
    TopologyElementType = 1001u32,
    DeviceType = 1002u32,
    BlockType = 1003u32,
    ConfigurableObjectType = 1004u32,
    FunctionalGroupType = 1005u32,
    ProtocolType = 1006u32,
    NetworkType = 6247u32,
    ConnectionPointType = 6308u32,
    LockingServicesType = 6388u32,
    TransferServicesType = 6526u32,
    ComponentType = 15063u32,
    SoftwareType = 15106u32,
    DeviceHealthDiagnosticAlarmType = 15143u32,
    FailureAlarmType = 15292u32,
    CheckFunctionAlarmType = 15441u32,
    OffSpecAlarmType = 15590u32,
    MaintenanceRequiredAlarmType = 15739u32,
    IVendorNameplateType = 15035u32,
    ITagNameplateType = 15048u32,
    IDeviceHealthType = 15051u32,
    ISupportInfoType = 15054u32,
    SoftwareUpdateType = 1u32,
    SoftwareLoadingType = 127u32,
    PackageLoadingType = 135u32,
    DirectLoadingType = 153u32,
    CachedLoadingType = 171u32,
    FileSystemLoadingType = 192u32,
    SoftwareVersionType = 212u32,
    PrepareForUpdateStateMachineType = 213u32,
    InstallationStateMachineType = 249u32,
    PowerCycleStateMachineType = 285u32,
    ConfirmationStateMachineType = 307u32,
}
impl crate::IdentifierTable for ObjectTypeId {
    const NAMESPACE_URI: &'static str = crate::DI_NAMESPACE_URI;
    const ALL: &'static [Self] = &[
        Self::TopologyElementType,
        Self::DeviceType,
        Self::BlockType,
        Self::ConfigurableObjectType,
        Self::FunctionalGroupType,
        Self::ProtocolType,
        Self::NetworkType,
        Self::ConnectionPointType,
        Self::LockingServicesType,
        Self::TransferServicesType,
        Self::ComponentType,
        Self::SoftwareType,
        Self::DeviceHealthDiagnosticAlarmType,
        Self::FailureAlarmType,
        Self::CheckFunctionAlarmType,
        Self::OffSpecAlarmType,
        Self::MaintenanceRequiredAlarmType,
        Self::IVendorNameplateType,
        Self::ITagNameplateType,
        Self::IDeviceHealthType,
        Self::ISupportInfoType,
        Self::SoftwareUpdateType,
        Self::SoftwareLoadingType,
        Self::PackageLoadingType,
        Self::DirectLoadingType,
        Self::CachedLoadingType,
        Self::FileSystemLoadingType,
        Self::SoftwareVersionType,
        Self::PrepareForUpdateStateMachineType,
        Self::InstallationStateMachineType,
        Self::PowerCycleStateMachineType,
        Self::ConfirmationStateMachineType,
    ];
    fn id(&self) -> u32 {
        *self as u32
    }
    fn name(&self) -> &'static str {
        match self {
            Self::TopologyElementType => "TopologyElementType",
            Self::DeviceType => "DeviceType",
            Self::BlockType => "BlockType",
            Self::ConfigurableObjectType => "ConfigurableObjectType",
            Self::FunctionalGroupType => "FunctionalGroupType",
            Self::ProtocolType => "ProtocolType",
            Self::NetworkType => "NetworkType",
            Self::ConnectionPointType => "ConnectionPointType",
            Self::LockingServicesType => "LockingServicesType",
            Self::TransferServicesType => "TransferServicesType",
            Self::ComponentType => "ComponentType",
            Self::SoftwareType => "SoftwareType",
            Self::DeviceHealthDiagnosticAlarmType => "DeviceHealthDiagnosticAlarmType",
            Self::FailureAlarmType => "FailureAlarmType",
            Self::CheckFunctionAlarmType => "CheckFunctionAlarmType",
            Self::OffSpecAlarmType => "OffSpecAlarmType",
            Self::MaintenanceRequiredAlarmType => "MaintenanceRequiredAlarmType",
            Self::IVendorNameplateType => "IVendorNameplateType",
            Self::ITagNameplateType => "ITagNameplateType",
            Self::IDeviceHealthType => "IDeviceHealthType",
            Self::ISupportInfoType => "ISupportInfoType",
            Self::SoftwareUpdateType => "SoftwareUpdateType",
            Self::SoftwareLoadingType => "SoftwareLoadingType",
            Self::PackageLoadingType => "PackageLoadingType",
            Self::DirectLoadingType => "DirectLoadingType",
            Self::CachedLoadingType => "CachedLoadingType",
            Self::FileSystemLoadingType => "FileSystemLoadingType",
            Self::SoftwareVersionType => "SoftwareVersionType",
            Self::PrepareForUpdateStateMachineType => "PrepareForUpdateStateMachineType",
            Self::InstallationStateMachineType => "InstallationStateMachineType",
            Self::PowerCycleStateMachineType => "PowerCycleStateMachineType",
            Self::ConfirmationStateMachineType => "ConfirmationStateMachineType",
        }
    }
}
impl<'a> From<&'a ObjectTypeId> for opcua_types::ExpandedNodeId {
    fn from(r: &'a ObjectTypeId) -> Self {
        crate::IdentifierTable::expanded_node_id(r)
    }
}
impl From<ObjectTypeId> for opcua_types::ExpandedNodeId {
    fn from(r: ObjectTypeId) -> Self {
        crate::IdentifierTable::expanded_node_id(&r)
    }
}
impl TryFrom<u32> for ObjectTypeId {
    type Error = ();
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(
            match value {
                1001u32 => Self::TopologyElementType,
                1002u32 => Self::DeviceType,
                1003u32 => Self::BlockType,
                1004u32 => Self::ConfigurableObjectType,
                1005u32 => Self::FunctionalGroupType,
                1006u32 => Self::ProtocolType,
                6247u32 => Self::NetworkType,
                6308u32 => Self::ConnectionPointType,
                6388u32 => Self::LockingServicesType,
                6526u32 => Self::TransferServicesType,
                15063u32 => Self::ComponentType,
                15106u32 => Self::SoftwareType,
                15143u32 => Self::DeviceHealthDiagnosticAlarmType,
                15292u32 => Self::FailureAlarmType,
                15441u32 => Self::CheckFunctionAlarmType,
                15590u32 => Self::OffSpecAlarmType,
                15739u32 => Self::MaintenanceRequiredAlarmType,
                15035u32 => Self::IVendorNameplateType,
                15048u32 => Self::ITagNameplateType,
                15051u32 => Self::IDeviceHealthType,
                15054u32 => Self::ISupportInfoType,
                1u32 => Self::SoftwareUpdateType,
                127u32 => Self::SoftwareLoadingType,
                135u32 => Self::PackageLoadingType,
                153u32 => Self::DirectLoadingType,
                171u32 => Self::CachedLoadingType,
                192u32 => Self::FileSystemLoadingType,
                212u32 => Self::SoftwareVersionType,
                213u32 => Self::PrepareForUpdateStateMachineType,
                249u32 => Self::InstallationStateMachineType,
                285u32 => Self::PowerCycleStateMachineType,
                307u32 => Self::ConfirmationStateMachineType,
                _ => return Err(()),
            },
        )
    }
}
impl<'a> TryFrom<&'a str> for ObjectTypeId {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(
            match value {
                "TopologyElementType" => Self::TopologyElementType,
                "DeviceType" => Self::DeviceType,
                "BlockType" => Self::BlockType,
                "ConfigurableObjectType" => Self::ConfigurableObjectType,
                "FunctionalGroupType" => Self::FunctionalGroupType,
                "ProtocolType" => Self::ProtocolType,
                "NetworkType" => Self::NetworkType,
                "ConnectionPointType" => Self::ConnectionPointType,
                "LockingServicesType" => Self::LockingServicesType,
                "TransferServicesType" => Self::TransferServicesType,
                "ComponentType" => Self::ComponentType,
                "SoftwareType" => Self::SoftwareType,
                "DeviceHealthDiagnosticAlarmType" => Self::DeviceHealthDiagnosticAlarmType,
                "FailureAlarmType" => Self::FailureAlarmType,
                "CheckFunctionAlarmType" => Self::CheckFunctionAlarmType,
                "OffSpecAlarmType" => Self::OffSpecAlarmType,
                "MaintenanceRequiredAlarmType" => Self::MaintenanceRequiredAlarmType,
                "IVendorNameplateType" => Self::IVendorNameplateType,
                "ITagNameplateType" => Self::ITagNameplateType,
                "IDeviceHealthType" => Self::IDeviceHealthType,
                "ISupportInfoType" => Self::ISupportInfoType,
                "SoftwareUpdateType" => Self::SoftwareUpdateType,
                "SoftwareLoadingType" => Self::SoftwareLoadingType,
                "PackageLoadingType" => Self::PackageLoadingType,
                "DirectLoadingType" => Self::DirectLoadingType,
                "CachedLoadingType" => Self::CachedLoadingType,
                "FileSystemLoadingType" => Self::FileSystemLoadingType,
                "SoftwareVersionType" => Self::SoftwareVersionType,
                "PrepareForUpdateStateMachineType" => Self::PrepareForUpdateStateMachineType,
                "InstallationStateMachineType" => Self::InstallationStateMachineType,
                "PowerCycleStateMachineType" => Self::PowerCycleStateMachineType,
                "ConfirmationStateMachineType" => Self::ConfirmationStateMachineType,
                _ => return Err(()),
            },
        )
    }
}
/// Identifiers of ReferenceType nodes in the namespace `http://opcfoundation.org/UA/DI/`.
#[allow(non_camel_case_types, clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[repr(u32)]
pub enum ReferenceTypeId {
    ConnectsTo = 6030u32,
    IsOnline = 6031u32,
    ConnectsToParent = 6467u32,
}
impl crate::IdentifierTable for ReferenceTypeId {
    const NAMESPACE_URI: &'static str = crate::DI_NAMESPACE_URI;
    const ALL: &'static [Self] = &[
        Self::ConnectsTo,
        Self::IsOnline,
        Self::ConnectsToParent,
    ];
    fn id(&self) -> u32 {
        *self as u32
    }
    fn name(&self) -> &'static str {
        match self {
            Self::ConnectsTo => "ConnectsTo",
            Self::IsOnline => "IsOnline",
            Self::ConnectsToParent => "ConnectsToParent",
        }
    }
}
impl<'a> From<&'a ReferenceTypeId> for opcua_types::ExpandedNodeId {
    fn from(r: &'a ReferenceTypeId) -> Self {
        crate::IdentifierTable::expanded_node_id(r)
    }
}
impl From<ReferenceTypeId> for opcua_types::ExpandedNodeId {
    fn from(r: ReferenceTypeId) -> Self {
        crate::IdentifierTable::expanded_node_id(&r)
    }
}
impl TryFrom<u32> for ReferenceTypeId {
    type Error = ();
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(
            match value {
                6030u32 => Self::ConnectsTo,
                6031u32 => Self::IsOnline,
                6467u32 => Self::ConnectsToParent,
                _ => return Err(()),
            },
        )
    }
}
impl<'a> TryFrom<&'a str> for ReferenceTypeId {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(
            match value {
                "ConnectsTo" => Self::ConnectsTo,
                "IsOnline" => Self::IsOnline,
                "ConnectsToParent" => Self::ConnectsToParent,
                _ => return Err(()),
            },
        )
    }
}
/// Identifiers of Variable nodes in the namespace `http://opcfoundation.org/UA/DI/`.
#[allow(non_camel_case_types, clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[repr(u32)]
pub enum VariableId {
    DeviceType_SerialNumber = 6001u32,
    DeviceType_RevisionCounter = 6002u32,
    DeviceType_Manufacturer = 6003u32,
    DeviceType_Model = 6004u32,
    DeviceType_DeviceManual = 6005u32,
    DeviceType_DeviceRevision = 6006u32,
    DeviceType_SoftwareRevision = 6007u32,
    DeviceType_HardwareRevision = 6008u32,
    BlockType_RevisionCounter = 6009u32,
    BlockType_ActualMode = 6010u32,
    BlockType_PermittedMode = 6011u32,
    BlockType_NormalMode = 6012u32,
    BlockType_TargetMode = 6013u32,
    TopologyElementType_ParameterSet_ParameterIdentifier = 6017u32,
    DeviceTopology_OnlineAccess = 6095u32,
    TopologyElementType_Lock_LockingClient = 6163u32,
    TopologyElementType_Lock_LockingUser = 6164u32,
    TopologyElementType_Lock_RemainingLockTime = 6165u32,
    TopologyElementType_Lock_InitLock_InputArguments = 6167u32,
    TopologyElementType_Lock_InitLock_OutputArguments = 6168u32,
    TopologyElementType_Lock_RenewLock_OutputArguments = 6170u32,
    TopologyElementType_Lock_ExitLock_OutputArguments = 6172u32,
    TopologyElementType_Lock_BreakLock_OutputArguments = 6174u32,
    DeviceType_DeviceHealth = 6208u32,
    DeviceType_DeviceTypeImage_ImageIdentifier = 6210u32,
    DeviceType_Documentation_DocumentIdentifier = 6212u32,
    DeviceType_ProtocolSupport_ProtocolSupportIdentifier = 6214u32,
    DeviceType_ImageSet_ImageIdentifier = 6216u32,
    FunctionalGroupType_UIElement = 6242u32,
    OpcUaDi_XmlSchema = 6423u32,
    OpcUaDi_XmlSchema_NamespaceUri = 6425u32,
    OpcUaDi_BinarySchema = 6435u32,
    OpcUaDi_BinarySchema_NamespaceUri = 6437u32,
    LockingServicesType_LockingClient = 6390u32,
    LockingServicesType_LockingUser = 6391u32,
    LockingServicesType_RemainingLockTime = 6392u32,
    LockingServicesType_InitLock_InputArguments = 6394u32,
    LockingServicesType_InitLock_OutputArguments = 6395u32,
    LockingServicesType_RenewLock_OutputArguments = 6397u32,
    LockingServicesType_ExitLock_OutputArguments = 6399u32,
    LockingServicesType_BreakLock_OutputArguments = 6401u32,
    DeviceHealthEnumeration_EnumStrings = 6450u32,
    TopologyElementType_Lock_Locked = 6468u32,
    DeviceType_DeviceClass = 6470u32,
    TransferServicesType_TransferToDevice_OutputArguments = 6528u32,
    TransferServicesType_TransferFromDevice_OutputArguments = 6530u32,
    TransferServicesType_FetchTransferResultData_InputArguments = 6532u32,
    TransferServicesType_FetchTransferResultData_OutputArguments = 6533u32,
    LockingServicesType_Locked = 6534u32,
    SoftwareVersionFileType_EnumStrings = 332u32,
    UpdateBehavior_OptionSetValues = 334u32,
    LifetimeVariableType_StartValue = 469u32,
    LifetimeVariableType_LimitValue = 470u32,
    OPCUADINamespaceMetadata_NamespaceUri = 15002u32,
    OPCUADINamespaceMetadata_NamespaceVersion = 15003u32,
    OPCUADINamespaceMetadata_NamespacePublicationDate = 15004u32,
    OPCUADINamespaceMetadata_IsNamespaceSubset = 15005u32,
    OPCUADINamespaceMetadata_StaticNodeIdTypes = 15006u32,
    OPCUADINamespaceMetadata_StaticNumericNodeIdRange = 15007u32,
    OPCUADINamespaceMetadata_StaticStringNodeIdPattern = 15008u32,
    DeviceType_ManufacturerUri = 15101u32,
    DeviceType_ProductCode = 15102u32,
    DeviceType_ProductInstanceUri = 15103u32,
    IVendorNameplateType_Manufacturer = 15036u32,
    IVendorNameplateType_ManufacturerUri = 15037u32,
    IVendorNameplateType_Model = 15038u32,
    IVendorNameplateType_HardwareRevision = 15039u32,
    IVendorNameplateType_SoftwareRevision = 15040u32,
    IVendorNameplateType_DeviceRevision = 15041u32,
    IVendorNameplateType_ProductCode = 15042u32,
    IVendorNameplateType_DeviceManual = 15043u32,
    IVendorNameplateType_DeviceClass = 15044u32,
    IVendorNameplateType_SerialNumber = 15045u32,
    IVendorNameplateType_ProductInstanceUri = 15046u32,
    IVendorNameplateType_RevisionCounter = 15047u32,
    ITagNameplateType_AssetId = 15049u32,
    ITagNameplateType_ComponentName = 15050u32,
    IDeviceHealthType_DeviceHealth = 15052u32,
    ISupportInfoType_DeviceTypeImage_ImageIdentifier = 15056u32,
    ISupportInfoType_Documentation_DocumentIdentifier = 15058u32,
    ISupportInfoType_ProtocolSupport_ProtocolSupportIdentifier = 15060u32,
    ISupportInfoType_ImageSet_ImageIdentifier = 15062u32,
    OpcUaDi_BinarySchema_FetchResultDataType = 6556u32,
    OpcUaDi_BinarySchema_ParameterResultDataType = 6559u32,
    OpcUaDi_XmlSchema_FetchResultDataType = 6539u32,
    OpcUaDi_XmlSchema_ParameterResultDataType = 6542u32,
    OpcUaDi_BinarySchema_TransferResultErrorDataType = 15893u32,
    OpcUaDi_BinarySchema_TransferResultDataDataType = 15896u32,
    OpcUaDi_XmlSchema_TransferResultErrorDataType = 15902u32,
    OpcUaDi_XmlSchema_TransferResultDataDataType = 15905u32,
}
impl crate::IdentifierTable for VariableId {
    const NAMESPACE_URI: &'static str = crate::DI_NAMESPACE_URI;
    const ALL: &'static [Self] = &[
        Self::DeviceType_SerialNumber,
        Self::DeviceType_RevisionCounter,
        Self::DeviceType_Manufacturer,
        Self::DeviceType_Model,
        Self::DeviceType_DeviceManual,
        Self::DeviceType_DeviceRevision,
        Self::DeviceType_SoftwareRevision,
        Self::DeviceType_HardwareRevision,
        Self::BlockType_RevisionCounter,
        Self::BlockType_ActualMode,
        Self::BlockType_PermittedMode,
        Self::BlockType_NormalMode,
        Self::BlockType_TargetMode,
        Self::TopologyElementType_ParameterSet_ParameterIdentifier,
        Self::DeviceTopology_OnlineAccess,
        Self::TopologyElementType_Lock_LockingClient,
        Self::TopologyElementType_Lock_LockingUser,
        Self::TopologyElementType_Lock_RemainingLockTime,
        Self::TopologyElementType_Lock_InitLock_InputArguments,
        Self::TopologyElementType_Lock_InitLock_OutputArguments,
        Self::TopologyElementType_Lock_RenewLock_OutputArguments,
        Self::TopologyElementType_Lock_ExitLock_OutputArguments,
        Self::TopologyElementType_Lock_BreakLock_OutputArguments,
        Self::DeviceType_DeviceHealth,
        Self::DeviceType_DeviceTypeImage_ImageIdentifier,
        Self::DeviceType_Documentation_DocumentIdentifier,
        Self::DeviceType_ProtocolSupport_ProtocolSupportIdentifier,
        Self::DeviceType_ImageSet_ImageIdentifier,
        Self::FunctionalGroupType_UIElement,
        Self::OpcUaDi_XmlSchema,
        Self::OpcUaDi_XmlSchema_NamespaceUri,
        Self::OpcUaDi_BinarySchema,
        Self::OpcUaDi_BinarySchema_NamespaceUri,
        Self::LockingServicesType_LockingClient,
        Self::LockingServicesType_LockingUser,
        Self::LockingServicesType_RemainingLockTime,
        Self::LockingServicesType_InitLock_InputArguments,
        Self::LockingServicesType_InitLock_OutputArguments,
        Self::LockingServicesType_RenewLock_OutputArguments,
        Self::LockingServicesType_ExitLock_OutputArguments,
        Self::LockingServicesType_BreakLock_OutputArguments,
        Self::DeviceHealthEnumeration_EnumStrings,
        Self::TopologyElementType_Lock_Locked,
        Self::DeviceType_DeviceClass,
        Self::TransferServicesType_TransferToDevice_OutputArguments,
        Self::TransferServicesType_TransferFromDevice_OutputArguments,
        Self::TransferServicesType_FetchTransferResultData_InputArguments,
        Self::TransferServicesType_FetchTransferResultData_OutputArguments,
        Self::LockingServicesType_Locked,
        Self::SoftwareVersionFileType_EnumStrings,
        Self::UpdateBehavior_OptionSetValues,
        Self::LifetimeVariableType_StartValue,
        Self::LifetimeVariableType_LimitValue,
        Self::OPCUADINamespaceMetadata_NamespaceUri,
        Self::OPCUADINamespaceMetadata_NamespaceVersion,
        Self::OPCUADINamespaceMetadata_NamespacePublicationDate,
        Self::OPCUADINamespaceMetadata_IsNamespaceSubset,
        Self::OPCUADINamespaceMetadata_StaticNodeIdTypes,
        Self::OPCUADINamespaceMetadata_StaticNumericNodeIdRange,
        Self::OPCUADINamespaceMetadata_StaticStringNodeIdPattern,
        Self::DeviceType_ManufacturerUri,
        Self::DeviceType_ProductCode,
        Self::DeviceType_ProductInstanceUri,
        Self::IVendorNameplateType_Manufacturer,
        Self::IVendorNameplateType_ManufacturerUri,
        Self::IVendorNameplateType_Model,
        Self::IVendorNameplateType_HardwareRevision,
        Self::IVendorNameplateType_SoftwareRevision,
        Self::IVendorNameplateType_DeviceRevision,
        Self::IVendorNameplateType_ProductCode,
        Self::IVendorNameplateType_DeviceManual,
        Self::IVendorNameplateType_DeviceClass,
        Self::IVendorNameplateType_SerialNumber,
        Self::IVendorNameplateType_ProductInstanceUri,
        Self::IVendorNameplateType_RevisionCounter,
        Self::ITagNameplateType_AssetId,
        Self::ITagNameplateType_ComponentName,
        Self::IDeviceHealthType_DeviceHealth,
        Self::ISupportInfoType_DeviceTypeImage_ImageIdentifier,
        Self::ISupportInfoType_Documentation_DocumentIdentifier,
        Self::ISupportInfoType_ProtocolSupport_ProtocolSupportIdentifier,
        Self::ISupportInfoType_ImageSet_ImageIdentifier,
        Self::OpcUaDi_BinarySchema_FetchResultDataType,
        Self::OpcUaDi_BinarySchema_ParameterResultDataType,
        Self::OpcUaDi_XmlSchema_FetchResultDataType,
        Self::OpcUaDi_XmlSchema_ParameterResultDataType,
        Self::OpcUaDi_BinarySchema_TransferResultErrorDataType,
        Self::OpcUaDi_BinarySchema_TransferResultDataDataType,
        Self::OpcUaDi_XmlSchema_TransferResultErrorDataType,
        Self::OpcUaDi_XmlSchema_TransferResultDataDataType,
    ];
    fn id(&self) -> u32 {
        *self as u32
    }
    fn name(&self) -> &'static str {
        match self {
            Self::DeviceType_SerialNumber => "DeviceType_SerialNumber",
            Self::DeviceType_RevisionCounter => "DeviceType_RevisionCounter",
            Self::DeviceType_Manufacturer => "DeviceType_Manufacturer",
            Self::DeviceType_Model => "DeviceType_Model",
            Self::DeviceType_DeviceManual => "DeviceType_DeviceManual",
            Self::DeviceType_DeviceRevision => "DeviceType_DeviceRevision",
            Self::DeviceType_SoftwareRevision => "DeviceType_SoftwareRevision",
            Self::DeviceType_HardwareRevision => "DeviceType_HardwareRevision",
            Self::BlockType_RevisionCounter => "BlockType_RevisionCounter",
            Self::BlockType_ActualMode => "BlockType_ActualMode",
            Self::BlockType_PermittedMode => "BlockType_PermittedMode",
            Self::BlockType_NormalMode => "BlockType_NormalMode",
            Self::BlockType_TargetMode => "BlockType_TargetMode",
            Self::TopologyElementType_ParameterSet_ParameterIdentifier => "TopologyElementType_ParameterSet_ParameterIdentifier",
            Self::DeviceTopology_OnlineAccess => "DeviceTopology_OnlineAccess",
            Self::TopologyElementType_Lock_LockingClient => "TopologyElementType_Lock_LockingClient",
            Self::TopologyElementType_Lock_LockingUser => "TopologyElementType_Lock_LockingUser",
            Self::TopologyElementType_Lock_RemainingLockTime => "TopologyElementType_Lock_RemainingLockTime",
            Self::TopologyElementType_Lock_InitLock_InputArguments => "TopologyElementType_Lock_InitLock_InputArguments",
            Self::TopologyElementType_Lock_InitLock_OutputArguments => "TopologyElementType_Lock_InitLock_OutputArguments",
            Self::TopologyElementType_Lock_RenewLock_OutputArguments => "TopologyElementType_Lock_RenewLock_OutputArguments",
            Self::TopologyElementType_Lock_ExitLock_OutputArguments => "TopologyElementType_Lock_ExitLock_OutputArguments",
            Self::TopologyElementType_Lock_BreakLock_OutputArguments => "TopologyElementType_Lock_BreakLock_OutputArguments",
            Self::DeviceType_DeviceHealth => "DeviceType_DeviceHealth",
            Self::DeviceType_DeviceTypeImage_ImageIdentifier => "DeviceType_DeviceTypeImage_ImageIdentifier",
            Self::DeviceType_Documentation_DocumentIdentifier => "DeviceType_Documentation_DocumentIdentifier",
            Self::DeviceType_ProtocolSupport_ProtocolSupportIdentifier => "DeviceType_ProtocolSupport_ProtocolSupportIdentifier",
            Self::DeviceType_ImageSet_ImageIdentifier => "DeviceType_ImageSet_ImageIdentifier",
            Self::FunctionalGroupType_UIElement => "FunctionalGroupType_UIElement",
            Self::OpcUaDi_XmlSchema => "OpcUaDi_XmlSchema",
            Self::OpcUaDi_XmlSchema_NamespaceUri => "OpcUaDi_XmlSchema_NamespaceUri",
            Self::OpcUaDi_BinarySchema => "OpcUaDi_BinarySchema",
            Self::OpcUaDi_BinarySchema_NamespaceUri => "OpcUaDi_BinarySchema_NamespaceUri",
            Self::LockingServicesType_LockingClient => "LockingServicesType_LockingClient",
            Self::LockingServicesType_LockingUser => "LockingServicesType_LockingUser",
            Self::LockingServicesType_RemainingLockTime => "LockingServicesType_RemainingLockTime",
            Self::LockingServicesType_InitLock_InputArguments => "LockingServicesType_InitLock_InputArguments",
            Self::LockingServicesType_InitLock_OutputArguments => "LockingServicesType_InitLock_OutputArguments",
            Self::LockingServicesType_RenewLock_OutputArguments => "LockingServicesType_RenewLock_OutputArguments",
            Self::LockingServicesType_ExitLock_OutputArguments => "LockingServicesType_ExitLock_OutputArguments",
            Self::LockingServicesType_BreakLock_OutputArguments => "LockingServicesType_BreakLock_OutputArguments",
            Self::DeviceHealthEnumeration_EnumStrings => "DeviceHealthEnumeration_EnumStrings",
            Self::TopologyElementType_Lock_Locked => "TopologyElementType_Lock_Locked",
            Self::DeviceType_DeviceClass => "DeviceType_DeviceClass",
            Self::TransferServicesType_TransferToDevice_OutputArguments => "TransferServicesType_TransferToDevice_OutputArguments",
            Self::TransferServicesType_TransferFromDevice_OutputArguments => "TransferServicesType_TransferFromDevice_OutputArguments",
            Self::TransferServicesType_FetchTransferResultData_InputArguments => "TransferServicesType_FetchTransferResultData_InputArguments",
            Self::TransferServicesType_FetchTransferResultData_OutputArguments => "TransferServicesType_FetchTransferResultData_OutputArguments",
            Self::LockingServicesType_Locked => "LockingServicesType_Locked",
            Self::SoftwareVersionFileType_EnumStrings => "SoftwareVersionFileType_EnumStrings",
            Self::UpdateBehavior_OptionSetValues => "UpdateBehavior_OptionSetValues",
            Self::LifetimeVariableType_StartValue => "LifetimeVariableType_StartValue",
            Self::LifetimeVariableType_LimitValue => "LifetimeVariableType_LimitValue",
            Self::OPCUADINamespaceMetadata_NamespaceUri => "OPCUADINamespaceMetadata_NamespaceUri",
            Self::OPCUADINamespaceMetadata_NamespaceVersion => "OPCUADINamespaceMetadata_NamespaceVersion",
            Self::OPCUADINamespaceMetadata_NamespacePublicationDate => "OPCUADINamespaceMetadata_NamespacePublicationDate",
            Self::OPCUADINamespaceMetadata_IsNamespaceSubset => "OPCUADINamespaceMetadata_IsNamespaceSubset",
            Self::OPCUADINamespaceMetadata_StaticNodeIdTypes => "OPCUADINamespaceMetadata_StaticNodeIdTypes",
            Self::OPCUADINamespaceMetadata_StaticNumericNodeIdRange => "OPCUADINamespaceMetadata_StaticNumericNodeIdRange",
            Self::OPCUADINamespaceMetadata_StaticStringNodeIdPattern => "OPCUADINamespaceMetadata_StaticStringNodeIdPattern",
            Self::DeviceType_ManufacturerUri => "DeviceType_ManufacturerUri",
            Self::DeviceType_ProductCode => "DeviceType_ProductCode",
            Self::DeviceType_ProductInstanceUri => "DeviceType_ProductInstanceUri",
            Self::IVendorNameplateType_Manufacturer => "IVendorNameplateType_Manufacturer",
            Self::IVendorNameplateType_ManufacturerUri => "IVendorNameplateType_ManufacturerUri",
            Self::IVendorNameplateType_Model => "IVendorNameplateType_Model",
            Self::IVendorNameplateType_HardwareRevision => "IVendorNameplateType_HardwareRevision",
            Self::IVendorNameplateType_SoftwareRevision => "IVendorNameplateType_SoftwareRevision",
            Self::IVendorNameplateType_DeviceRevision => "IVendorNameplateType_DeviceRevision",
            Self::IVendorNameplateType_ProductCode => "IVendorNameplateType_ProductCode",
            Self::IVendorNameplateType_DeviceManual => "IVendorNameplateType_DeviceManual",
            Self::IVendorNameplateType_DeviceClass => "IVendorNameplateType_DeviceClass",
            Self::IVendorNameplateType_SerialNumber => "IVendorNameplateType_SerialNumber",
            Self::IVendorNameplateType_ProductInstanceUri => "IVendorNameplateType_ProductInstanceUri",
            Self::IVendorNameplateType_RevisionCounter => "IVendorNameplateType_RevisionCounter",
            Self::ITagNameplateType_AssetId => "ITagNameplateType_AssetId",
            Self::ITagNameplateType_ComponentName => "ITagNameplateType_ComponentName",
            Self::IDeviceHealthType_DeviceHealth => "IDeviceHealthType_DeviceHealth",
            Self::ISupportInfoType_DeviceTypeImage_ImageIdentifier => "ISupportInfoType_DeviceTypeImage_ImageIdentifier",
            Self::ISupportInfoType_Documentation_DocumentIdentifier => "ISupportInfoType_Documentation_DocumentIdentifier",
            Self::ISupportInfoType_ProtocolSupport_ProtocolSupportIdentifier => "ISupportInfoType_ProtocolSupport_ProtocolSupportIdentifier",
            Self::ISupportInfoType_ImageSet_ImageIdentifier => "ISupportInfoType_ImageSet_ImageIdentifier",
            Self::OpcUaDi_BinarySchema_FetchResultDataType => "OpcUaDi_BinarySchema_FetchResultDataType",
            Self::OpcUaDi_BinarySchema_ParameterResultDataType => "OpcUaDi_BinarySchema_ParameterResultDataType",
            Self::OpcUaDi_XmlSchema_FetchResultDataType => "OpcUaDi_XmlSchema_FetchResultDataType",
            Self::OpcUaDi_XmlSchema_ParameterResultDataType => "OpcUaDi_XmlSchema_ParameterResultDataType",
            Self::OpcUaDi_BinarySchema_TransferResultErrorDataType => "OpcUaDi_BinarySchema_TransferResultErrorDataType",
            Self::OpcUaDi_BinarySchema_TransferResultDataDataType => "OpcUaDi_BinarySchema_TransferResultDataDataType",
            Self::OpcUaDi_XmlSchema_TransferResultErrorDataType => "OpcUaDi_XmlSchema_TransferResultErrorDataType",
            Self::OpcUaDi_XmlSchema_TransferResultDataDataType => "OpcUaDi_XmlSchema_TransferResultDataDataType",
        }
    }
}
impl<'a> From<&'a VariableId> for opcua_types::ExpandedNodeId {
    fn from(r: &'a VariableId) -> Self {
        crate::IdentifierTable::expanded_node_id(r)
    }
}
impl From<VariableId> for opcua_types::ExpandedNodeId {
    fn from(r: VariableId) -> Self {
        crate::IdentifierTable::expanded_node_id(&r)
    }
}
impl TryFrom<u32> for VariableId {
    type Error = ();
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(
            match value {
                6001u32 => Self::DeviceType_SerialNumber,
                6002u32 => Self::DeviceType_RevisionCounter,
                6003u32 => Self::DeviceType_Manufacturer,
                6004u32 => Self::DeviceType_Model,
                6005u32 => Self::DeviceType_DeviceManual,
                6006u32 => Self::DeviceType_DeviceRevision,
                6007u32 => Self::DeviceType_SoftwareRevision,
                6008u32 => Self::DeviceType_HardwareRevision,
                6009u32 => Self::BlockType_RevisionCounter,
                6010u32 => Self::BlockType_ActualMode,
                6011u32 => Self::BlockType_PermittedMode,
                6012u32 => Self::BlockType_NormalMode,
                6013u32 => Self::BlockType_TargetMode,
                6017u32 => Self::TopologyElementType_ParameterSet_ParameterIdentifier,
                6095u32 => Self::DeviceTopology_OnlineAccess,
                6163u32 => Self::TopologyElementType_Lock_LockingClient,
                6164u32 => Self::TopologyElementType_Lock_LockingUser,
                6165u32 => Self::TopologyElementType_Lock_RemainingLockTime,
                6167u32 => Self::TopologyElementType_Lock_InitLock_InputArguments,
                6168u32 => Self::TopologyElementType_Lock_InitLock_OutputArguments,
                6170u32 => Self::TopologyElementType_Lock_RenewLock_OutputArguments,
                6172u32 => Self::TopologyElementType_Lock_ExitLock_OutputArguments,
                6174u32 => Self::TopologyElementType_Lock_BreakLock_OutputArguments,
                6208u32 => Self::DeviceType_DeviceHealth,
                6210u32 => Self::DeviceType_DeviceTypeImage_ImageIdentifier,
                6212u32 => Self::DeviceType_Documentation_DocumentIdentifier,
                6214u32 => Self::DeviceType_ProtocolSupport_ProtocolSupportIdentifier,
                6216u32 => Self::DeviceType_ImageSet_ImageIdentifier,
                6242u32 => Self::FunctionalGroupType_UIElement,
                6423u32 => Self::OpcUaDi_XmlSchema,
                6425u32 => Self::OpcUaDi_XmlSchema_NamespaceUri,
                6435u32 => Self::OpcUaDi_BinarySchema,
                6437u32 => Self::OpcUaDi_BinarySchema_NamespaceUri,
                6390u32 => Self::LockingServicesType_LockingClient,
                6391u32 => Self::LockingServicesType_LockingUser,
                6392u32 => Self::LockingServicesType_RemainingLockTime,
                6394u32 => Self::LockingServicesType_InitLock_InputArguments,
                6395u32 => Self::LockingServicesType_InitLock_OutputArguments,
                6397u32 => Self::LockingServicesType_RenewLock_OutputArguments,
                6399u32 => Self::LockingServicesType_ExitLock_OutputArguments,
                6401u32 => Self::LockingServicesType_BreakLock_OutputArguments,
                6450u32 => Self::DeviceHealthEnumeration_EnumStrings,
                6468u32 => Self::TopologyElementType_Lock_Locked,
                6470u32 => Self::DeviceType_DeviceClass,
                6528u32 => Self::TransferServicesType_TransferToDevice_OutputArguments,
                6530u32 => Self::TransferServicesType_TransferFromDevice_OutputArguments,
                6532u32 => Self::TransferServicesType_FetchTransferResultData_InputArguments,
                6533u32 => Self::TransferServicesType_FetchTransferResultData_OutputArguments,
                6534u32 => Self::LockingServicesType_Locked,
                332u32 => Self::SoftwareVersionFileType_EnumStrings,
                334u32 => Self::UpdateBehavior_OptionSetValues,
                469u32 => Self::LifetimeVariableType_StartValue,
                470u32 => Self::LifetimeVariableType_LimitValue,
                15002u32 => Self::OPCUADINamespaceMetadata_NamespaceUri,
                15003u32 => Self::OPCUADINamespaceMetadata_NamespaceVersion,
                15004u32 => Self::OPCUADINamespaceMetadata_NamespacePublicationDate,
                15005u32 => Self::OPCUADINamespaceMetadata_IsNamespaceSubset,
                15006u32 => Self::OPCUADINamespaceMetadata_StaticNodeIdTypes,
                15007u32 => Self::OPCUADINamespaceMetadata_StaticNumericNodeIdRange,
                15008u32 => Self::OPCUADINamespaceMetadata_StaticStringNodeIdPattern,
                15101u32 => Self::DeviceType_ManufacturerUri,
                15102u32 => Self::DeviceType_ProductCode,
                15103u32 => Self::DeviceType_ProductInstanceUri,
                15036u32 => Self::IVendorNameplateType_Manufacturer,
                15037u32 => Self::IVendorNameplateType_ManufacturerUri,
                15038u32 => Self::IVendorNameplateType_Model,
                15039u32 => Self::IVendorNameplateType_HardwareRevision,
                15040u32 => Self::IVendorNameplateType_SoftwareRevision,
                15041u32 => Self::IVendorNameplateType_DeviceRevision,
                15042u32 => Self::IVendorNameplateType_ProductCode,
                15043u32 => Self::IVendorNameplateType_DeviceManual,
                15044u32 => Self::IVendorNameplateType_DeviceClass,
                15045u32 => Self::IVendorNameplateType_SerialNumber,
                15046u32 => Self::IVendorNameplateType_ProductInstanceUri,
                15047u32 => Self::IVendorNameplateType_RevisionCounter,
                15049u32 => Self::ITagNameplateType_AssetId,
                15050u32 => Self::ITagNameplateType_ComponentName,
                15052u32 => Self::IDeviceHealthType_DeviceHealth,
                15056u32 => Self::ISupportInfoType_DeviceTypeImage_ImageIdentifier,
                15058u32 => Self::ISupportInfoType_Documentation_DocumentIdentifier,
                15060u32 => Self::ISupportInfoType_ProtocolSupport_ProtocolSupportIdentifier,
                15062u32 => Self::ISupportInfoType_ImageSet_ImageIdentifier,
                6556u32 => Self::OpcUaDi_BinarySchema_FetchResultDataType,
                6559u32 => Self::OpcUaDi_BinarySchema_ParameterResultDataType,
                6539u32 => Self::OpcUaDi_XmlSchema_FetchResultDataType,
                6542u32 => Self::OpcUaDi_XmlSchema_ParameterResultDataType,
                15893u32 => Self::OpcUaDi_BinarySchema_TransferResultErrorDataType,
                15896u32 => Self::OpcUaDi_BinarySchema_TransferResultDataDataType,
                15902u32 => Self::OpcUaDi_XmlSchema_TransferResultErrorDataType,
                15905u32 => Self::OpcUaDi_XmlSchema_TransferResultDataDataType,
                _ => return Err(()),
            },
        )
    }
}
impl<'a> TryFrom<&'a str> for VariableId {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(
            match value {
                "DeviceType_SerialNumber" => Self::DeviceType_SerialNumber,
                "DeviceType_RevisionCounter" => Self::DeviceType_RevisionCounter,
                "DeviceType_Manufacturer" => Self::DeviceType_Manufacturer,
                "DeviceType_Model" => Self::DeviceType_Model,
                "DeviceType_DeviceManual" => Self::DeviceType_DeviceManual,
                "DeviceType_DeviceRevision" => Self::DeviceType_DeviceRevision,
                "DeviceType_SoftwareRevision" => Self::DeviceType_SoftwareRevision,
                "DeviceType_HardwareRevision" => Self::DeviceType_HardwareRevision,
                "BlockType_RevisionCounter" => Self::BlockType_RevisionCounter,
                "BlockType_ActualMode" => Self::BlockType_ActualMode,
                "BlockType_PermittedMode" => Self::BlockType_PermittedMode,
                "BlockType_NormalMode" => Self::BlockType_NormalMode,
                "BlockType_TargetMode" => Self::BlockType_TargetMode,
                "TopologyElementType_ParameterSet_ParameterIdentifier" => Self::TopologyElementType_ParameterSet_ParameterIdentifier,
                "DeviceTopology_OnlineAccess" => Self::DeviceTopology_OnlineAccess,
                "TopologyElementType_Lock_LockingClient" => Self::TopologyElementType_Lock_LockingClient,
                "TopologyElementType_Lock_LockingUser" => Self::TopologyElementType_Lock_LockingUser,
                "TopologyElementType_Lock_RemainingLockTime" => Self::TopologyElementType_Lock_RemainingLockTime,
                "TopologyElementType_Lock_InitLock_InputArguments" => Self::TopologyElementType_Lock_InitLock_InputArguments,
                "TopologyElementType_Lock_InitLock_OutputArguments" => Self::TopologyElementType_Lock_InitLock_OutputArguments,
                "TopologyElementType_Lock_RenewLock_OutputArguments" => Self::TopologyElementType_Lock_RenewLock_OutputArguments,
                "TopologyElementType_Lock_ExitLock_OutputArguments" => Self::TopologyElementType_Lock_ExitLock_OutputArguments,
                "TopologyElementType_Lock_BreakLock_OutputArguments" => Self::TopologyElementType_Lock_BreakLock_OutputArguments,
                "DeviceType_DeviceHealth" => Self::DeviceType_DeviceHealth,
                "DeviceType_DeviceTypeImage_ImageIdentifier" => Self::DeviceType_DeviceTypeImage_ImageIdentifier,
                "DeviceType_Documentation_DocumentIdentifier" => Self::DeviceType_Documentation_DocumentIdentifier,
                "DeviceType_ProtocolSupport_ProtocolSupportIdentifier" => Self::DeviceType_ProtocolSupport_ProtocolSupportIdentifier,
                "DeviceType_ImageSet_ImageIdentifier" => Self::DeviceType_ImageSet_ImageIdentifier,
                "FunctionalGroupType_UIElement" => Self::FunctionalGroupType_UIElement,
                "OpcUaDi_XmlSchema" => Self::OpcUaDi_XmlSchema,
                "OpcUaDi_XmlSchema_NamespaceUri" => Self::OpcUaDi_XmlSchema_NamespaceUri,
                "OpcUaDi_BinarySchema" => Self::OpcUaDi_BinarySchema,
                "OpcUaDi_BinarySchema_NamespaceUri" => Self::OpcUaDi_BinarySchema_NamespaceUri,
                "LockingServicesType_LockingClient" => Self::LockingServicesType_LockingClient,
                "LockingServicesType_LockingUser" => Self::LockingServicesType_LockingUser,
                "LockingServicesType_RemainingLockTime" => Self::LockingServicesType_RemainingLockTime,
                "LockingServicesType_InitLock_InputArguments" => Self::LockingServicesType_InitLock_InputArguments,
                "LockingServicesType_InitLock_OutputArguments" => Self::LockingServicesType_InitLock_OutputArguments,
                "LockingServicesType_RenewLock_OutputArguments" => Self::LockingServicesType_RenewLock_OutputArguments,
                "LockingServicesType_ExitLock_OutputArguments" => Self::LockingServicesType_ExitLock_OutputArguments,
                "LockingServicesType_BreakLock_OutputArguments" => Self::LockingServicesType_BreakLock_OutputArguments,
                "DeviceHealthEnumeration_EnumStrings" => Self::DeviceHealthEnumeration_EnumStrings,
                "TopologyElementType_Lock_Locked" => Self::TopologyElementType_Lock_Locked,
                "DeviceType_DeviceClass" => Self::DeviceType_DeviceClass,
                "TransferServicesType_TransferToDevice_OutputArguments" => Self::TransferServicesType_TransferToDevice_OutputArguments,
                "TransferServicesType_TransferFromDevice_OutputArguments" => Self::TransferServicesType_TransferFromDevice_OutputArguments,
                "TransferServicesType_FetchTransferResultData_InputArguments" => Self::TransferServicesType_FetchTransferResultData_InputArguments,
                "TransferServicesType_FetchTransferResultData_OutputArguments" => Self::TransferServicesType_FetchTransferResultData_OutputArguments,
                "LockingServicesType_Locked" => Self::LockingServicesType_Locked,
                "SoftwareVersionFileType_EnumStrings" => Self::SoftwareVersionFileType_EnumStrings,
                "UpdateBehavior_OptionSetValues" => Self::UpdateBehavior_OptionSetValues,
                "LifetimeVariableType_StartValue" => Self::LifetimeVariableType_StartValue,
                "LifetimeVariableType_LimitValue" => Self::LifetimeVariableType_LimitValue,
                "OPCUADINamespaceMetadata_NamespaceUri" => Self::OPCUADINamespaceMetadata_NamespaceUri,
                "OPCUADINamespaceMetadata_NamespaceVersion" => Self::OPCUADINamespaceMetadata_NamespaceVersion,
                "OPCUADINamespaceMetadata_NamespacePublicationDate" => Self::OPCUADINamespaceMetadata_NamespacePublicationDate,
                "OPCUADINamespaceMetadata_IsNamespaceSubset" => Self::OPCUADINamespaceMetadata_IsNamespaceSubset,
                "OPCUADINamespaceMetadata_StaticNodeIdTypes" => Self::OPCUADINamespaceMetadata_StaticNodeIdTypes,
                "OPCUADINamespaceMetadata_StaticNumericNodeIdRange" => Self::OPCUADINamespaceMetadata_StaticNumericNodeIdRange,
                "OPCUADINamespaceMetadata_StaticStringNodeIdPattern" => Self::OPCUADINamespaceMetadata_StaticStringNodeIdPattern,
                "DeviceType_ManufacturerUri" => Self::DeviceType_ManufacturerUri,
                "DeviceType_ProductCode" => Self::DeviceType_ProductCode,
                "DeviceType_ProductInstanceUri" => Self::DeviceType_ProductInstanceUri,
                "IVendorNameplateType_Manufacturer" => Self::IVendorNameplateType_Manufacturer,
                "IVendorNameplateType_ManufacturerUri" => Self::IVendorNameplateType_ManufacturerUri,
                "IVendorNameplateType_Model" => Self::IVendorNameplateType_Model,
                "IVendorNameplateType_HardwareRevision" => Self::IVendorNameplateType_HardwareRevision,
                "IVendorNameplateType_SoftwareRevision" => Self::IVendorNameplateType_SoftwareRevision,
                "IVendorNameplateType_DeviceRevision" => Self::IVendorNameplateType_DeviceRevision,
                "IVendorNameplateType_ProductCode" => Self::IVendorNameplateType_ProductCode,
                "IVendorNameplateType_DeviceManual" => Self::IVendorNameplateType_DeviceManual,
                "IVendorNameplateType_DeviceClass" => Self::IVendorNameplateType_DeviceClass,
                "IVendorNameplateType_SerialNumber" => Self::IVendorNameplateType_SerialNumber,
                "IVendorNameplateType_ProductInstanceUri" => Self::IVendorNameplateType_ProductInstanceUri,
                "IVendorNameplateType_RevisionCounter" => Self::IVendorNameplateType_RevisionCounter,
                "ITagNameplateType_AssetId" => Self::ITagNameplateType_AssetId,
                "ITagNameplateType_ComponentName" => Self::ITagNameplateType_ComponentName,
                "IDeviceHealthType_DeviceHealth" => Self::IDeviceHealthType_DeviceHealth,
                "ISupportInfoType_DeviceTypeImage_ImageIdentifier" => Self::ISupportInfoType_DeviceTypeImage_ImageIdentifier,
                "ISupportInfoType_Documentation_DocumentIdentifier" => Self::ISupportInfoType_Documentation_DocumentIdentifier,
                "ISupportInfoType_ProtocolSupport_ProtocolSupportIdentifier" => Self::ISupportInfoType_ProtocolSupport_ProtocolSupportIdentifier,
                "ISupportInfoType_ImageSet_ImageIdentifier" => Self::ISupportInfoType_ImageSet_ImageIdentifier,
                "OpcUaDi_BinarySchema_FetchResultDataType" => Self::OpcUaDi_BinarySchema_FetchResultDataType,
                "OpcUaDi_BinarySchema_ParameterResultDataType" => Self::OpcUaDi_BinarySchema_ParameterResultDataType,
                "OpcUaDi_XmlSchema_FetchResultDataType" => Self::OpcUaDi_XmlSchema_FetchResultDataType,
                "OpcUaDi_XmlSchema_ParameterResultDataType" => Self::OpcUaDi_XmlSchema_ParameterResultDataType,
                "OpcUaDi_BinarySchema_TransferResultErrorDataType" => Self::OpcUaDi_BinarySchema_TransferResultErrorDataType,
                "OpcUaDi_BinarySchema_TransferResultDataDataType" => Self::OpcUaDi_BinarySchema_TransferResultDataDataType,
                "OpcUaDi_XmlSchema_TransferResultErrorDataType" => Self::OpcUaDi_XmlSchema_TransferResultErrorDataType,
                "OpcUaDi_XmlSchema_TransferResultDataDataType" => Self::OpcUaDi_XmlSchema_TransferResultDataDataType,
                _ => return Err(()),
            },
        )
    }
}
/// Identifiers of VariableType nodes in the namespace `http://opcfoundation.org/UA/DI/`.
#[allow(non_camel_case_types, clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[repr(u32)]
pub enum VariableTypeId {
    UIElementType = 6246u32,
    LifetimeVariableType = 468u32,
}
impl crate::IdentifierTable for VariableTypeId {
    const NAMESPACE_URI: &'static str = crate::DI_NAMESPACE_URI;
    const ALL: &'static [Self] = &[Self::UIElementType, Self::LifetimeVariableType];
    fn id(&self) -> u32 {
        *self as u32
    }
    fn name(&self) -> &'static str {
        match self {
            Self::UIElementType => "UIElementType",
            Self::LifetimeVariableType => "LifetimeVariableType",
        }
    }
}
impl<'a> From<&'a VariableTypeId> for opcua_types::ExpandedNodeId {
    fn from(r: &'a VariableTypeId) -> Self {
        crate::IdentifierTable::expanded_node_id(r)
    }
}
impl From<VariableTypeId> for opcua_types::ExpandedNodeId {
    fn from(r: VariableTypeId) -> Self {
        crate::IdentifierTable::expanded_node_id(&r)
    }
}
impl TryFrom<u32> for VariableTypeId {
    type Error = ();
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(
            match value {
                6246u32 => Self::UIElementType,
                468u32 => Self::LifetimeVariableType,
                _ => return Err(()),
            },
        )
    }
}
impl<'a> TryFrom<&'a str> for VariableTypeId {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(
            match value {
                "UIElementType" => Self::UIElementType,
                "LifetimeVariableType" => Self::LifetimeVariableType,
                _ => return Err(()),
            },
        )
    }
}
