// This file was autogenerated from schemas/BrowseNames.csv by opcua-di-codegen
//
// DO NOT EDIT THIS FILE

// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

/// Browse names of the elements of the information model.
#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum BrowseName {
    ActualMode,
    AssetId,
    BlockType,
    BreakLock,
    CachedLoadingType,
    CheckFunctionAlarmType,
    ComponentName,
    ComponentType,
    ConfigurableObjectType,
    ConfirmationStateMachineType,
    ConnectionPointType,
    ConnectsTo,
    ConnectsToParent,
    CPIdentifier,
    DeviceClass,
    DeviceFeatures,
    DeviceHealth,
    DeviceHealthAlarms,
    DeviceHealthDiagnosticAlarmType,
    DeviceHealthEnumeration,
    DeviceManual,
    DeviceRevision,
    DeviceSet,
    DeviceTopology,
    DeviceType,
    DeviceTypeImage,
    DirectLoadingType,
    Documentation,
    DocumentIdentifier,
    ExitLock,
    FailureAlarmType,
    FetchResultDataType,
    FetchTransferResultData,
    FileSystemLoadingType,
    FunctionalGroupType,
    GroupIdentifier,
    HardwareRevision,
    Identification,
    IDeviceHealthType,
    ImageIdentifier,
    ImageSet,
    InitLock,
    InstallationStateMachineType,
    IsOnline,
    ISupportInfoType,
    ITagNameplateType,
    IVendorNameplateType,
    LifetimeVariableType,
    LimitValue,
    Lock,
    Locked,
    LockingClient,
    LockingServicesType,
    LockingUser,
    MaintenanceRequiredAlarmType,
    Manufacturer,
    ManufacturerUri,
    MethodSet,
    Model,
    NetworkAddress,
    NetworkSet,
    NetworkType,
    NormalMode,
    ObjectIdentifier,
    OffSpecAlarmType,
    OnlineAccess,
    OpcUaDiBinarySchema,
    OPCUADINamespaceMetadata,
    OpcUaDiXmlSchema,
    PackageLoadingType,
    ParameterIdentifier,
    ParameterResultDataType,
    ParameterSet,
    PermittedMode,
    PowerCycleStateMachineType,
    PrepareForUpdateStateMachineType,
    ProductCode,
    ProductInstanceUri,
    ProfileIdentifier,
    ProtocolSupport,
    ProtocolSupportIdentifier,
    ProtocolType,
    RemainingLockTime,
    RenewLock,
    RevisionCounter,
    SerialNumber,
    SoftwareLoadingType,
    SoftwareRevision,
    SoftwareType,
    SoftwareUpdateType,
    SoftwareVersionFileType,
    SoftwareVersionType,
    StartValue,
    SupportedTypes,
    TargetMode,
    TopologyElementType,
    TransferFromDevice,
    TransferResultDataDataType,
    TransferResultErrorDataType,
    TransferServicesType,
    TransferToDevice,
    UIElement,
    UIElementType,
    UpdateBehavior,
}
impl BrowseName {
    /// Every browse name, in definition order.
    pub const ALL: &'static [BrowseName] = &[
        Self::ActualMode,
        Self::AssetId,
        Self::BlockType,
        Self::BreakLock,
        Self::CachedLoadingType,
        Self::CheckFunctionAlarmType,
        Self::ComponentName,
        Self::ComponentType,
        Self::ConfigurableObjectType,
        Self::ConfirmationStateMachineType,
        Self::ConnectionPointType,
        Self::ConnectsTo,
        Self::ConnectsToParent,
        Self::CPIdentifier,
        Self::DeviceClass,
        Self::DeviceFeatures,
        Self::DeviceHealth,
        Self::DeviceHealthAlarms,
        Self::DeviceHealthDiagnosticAlarmType,
        Self::DeviceHealthEnumeration,
        Self::DeviceManual,
        Self::DeviceRevision,
        Self::DeviceSet,
        Self::DeviceTopology,
        Self::DeviceType,
        Self::DeviceTypeImage,
        Self::DirectLoadingType,
        Self::Documentation,
        Self::DocumentIdentifier,
        Self::ExitLock,
        Self::FailureAlarmType,
        Self::FetchResultDataType,
        Self::FetchTransferResultData,
        Self::FileSystemLoadingType,
        Self::FunctionalGroupType,
        Self::GroupIdentifier,
        Self::HardwareRevision,
        Self::Identification,
        Self::IDeviceHealthType,
        Self::ImageIdentifier,
        Self::ImageSet,
        Self::InitLock,
        Self::InstallationStateMachineType,
        Self::IsOnline,
        Self::ISupportInfoType,
        Self::ITagNameplateType,
        Self::IVendorNameplateType,
        Self::LifetimeVariableType,
        Self::LimitValue,
        Self::Lock,
        Self::Locked,
        Self::LockingClient,
        Self::LockingServicesType,
        Self::LockingUser,
        Self::MaintenanceRequiredAlarmType,
        Self::Manufacturer,
        Self::ManufacturerUri,
        Self::MethodSet,
        Self::Model,
        Self::NetworkAddress,
        Self::NetworkSet,
        Self::NetworkType,
        Self::NormalMode,
        Self::ObjectIdentifier,
        Self::OffSpecAlarmType,
        Self::OnlineAccess,
        Self::OpcUaDiBinarySchema,
        Self::OPCUADINamespaceMetadata,
        Self::OpcUaDiXmlSchema,
        Self::PackageLoadingType,
        Self::ParameterIdentifier,
        Self::ParameterResultDataType,
        Self::ParameterSet,
        Self::PermittedMode,
        Self::PowerCycleStateMachineType,
        Self::PrepareForUpdateStateMachineType,
        Self::ProductCode,
        Self::ProductInstanceUri,
        Self::ProfileIdentifier,
        Self::ProtocolSupport,
        Self::ProtocolSupportIdentifier,
        Self::ProtocolType,
        Self::RemainingLockTime,
        Self::RenewLock,
        Self::RevisionCounter,
        Self::SerialNumber,
        Self::SoftwareLoadingType,
        Self::SoftwareRevision,
        Self::SoftwareType,
        Self::SoftwareUpdateType,
        Self::SoftwareVersionFileType,
        Self::SoftwareVersionType,
        Self::StartValue,
        Self::SupportedTypes,
        Self::TargetMode,
        Self::TopologyElementType,
        Self::TransferFromDevice,
        Self::TransferResultDataDataType,
        Self::TransferResultErrorDataType,
        Self::TransferServicesType,
        Self::TransferToDevice,
        Self::UIElement,
        Self::UIElementType,
        Self::UpdateBehavior,
    ];
    /// The browse name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActualMode => "ActualMode",
            Self::AssetId => "AssetId",
            Self::BlockType => "BlockType",
            Self::BreakLock => "BreakLock",
            Self::CachedLoadingType => "CachedLoadingType",
            Self::CheckFunctionAlarmType => "CheckFunctionAlarmType",
            Self::ComponentName => "ComponentName",
            Self::ComponentType => "ComponentType",
            Self::ConfigurableObjectType => "ConfigurableObjectType",
            Self::ConfirmationStateMachineType => "ConfirmationStateMachineType",
            Self::ConnectionPointType => "ConnectionPointType",
            Self::ConnectsTo => "ConnectsTo",
            Self::ConnectsToParent => "ConnectsToParent",
            Self::CPIdentifier => "<CPIdentifier>",
            Self::DeviceClass => "DeviceClass",
            Self::DeviceFeatures => "DeviceFeatures",
            Self::DeviceHealth => "DeviceHealth",
            Self::DeviceHealthAlarms => "DeviceHealthAlarms",
            Self::DeviceHealthDiagnosticAlarmType => "DeviceHealthDiagnosticAlarmType",
            Self::DeviceHealthEnumeration => "DeviceHealthEnumeration",
            Self::DeviceManual => "DeviceManual",
            Self::DeviceRevision => "DeviceRevision",
            Self::DeviceSet => "DeviceSet",
            Self::DeviceTopology => "DeviceTopology",
            Self::DeviceType => "DeviceType",
            Self::DeviceTypeImage => "DeviceTypeImage",
            Self::DirectLoadingType => "DirectLoadingType",
            Self::Documentation => "Documentation",
            Self::DocumentIdentifier => "<DocumentIdentifier>",
            Self::ExitLock => "ExitLock",
            Self::FailureAlarmType => "FailureAlarmType",
            Self::FetchResultDataType => "FetchResultDataType",
            Self::FetchTransferResultData => "FetchTransferResultData",
            Self::FileSystemLoadingType => "FileSystemLoadingType",
            Self::FunctionalGroupType => "FunctionalGroupType",
            Self::GroupIdentifier => "<GroupIdentifier>",
            Self::HardwareRevision => "HardwareRevision",
            Self::Identification => "Identification",
            Self::IDeviceHealthType => "IDeviceHealthType",
            Self::ImageIdentifier => "<ImageIdentifier>",
            Self::ImageSet => "ImageSet",
            Self::InitLock => "InitLock",
            Self::InstallationStateMachineType => "InstallationStateMachineType",
            Self::IsOnline => "IsOnline",
            Self::ISupportInfoType => "ISupportInfoType",
            Self::ITagNameplateType => "ITagNameplateType",
            Self::IVendorNameplateType => "IVendorNameplateType",
            Self::LifetimeVariableType => "LifetimeVariableType",
            Self::LimitValue => "LimitValue",
            Self::Lock => "Lock",
            Self::Locked => "Locked",
            Self::LockingClient => "LockingClient",
            Self::LockingServicesType => "LockingServicesType",
            Self::LockingUser => "LockingUser",
            Self::MaintenanceRequiredAlarmType => "MaintenanceRequiredAlarmType",
            Self::Manufacturer => "Manufacturer",
            Self::ManufacturerUri => "ManufacturerUri",
            Self::MethodSet => "MethodSet",
            Self::Model => "Model",
            Self::NetworkAddress => "NetworkAddress",
            Self::NetworkSet => "NetworkSet",
            Self::NetworkType => "NetworkType",
            Self::NormalMode => "NormalMode",
            Self::ObjectIdentifier => "<ObjectIdentifier>",
            Self::OffSpecAlarmType => "OffSpecAlarmType",
            Self::OnlineAccess => "OnlineAccess",
            Self::OpcUaDiBinarySchema => "Opc.Ua.Di",
            Self::OPCUADINamespaceMetadata => "http://opcfoundation.org/UA/DI/",
            Self::OpcUaDiXmlSchema => "Opc.Ua.Di",
            Self::PackageLoadingType => "PackageLoadingType",
            Self::ParameterIdentifier => "<ParameterIdentifier>",
            Self::ParameterResultDataType => "ParameterResultDataType",
            Self::ParameterSet => "ParameterSet",
            Self::PermittedMode => "PermittedMode",
            Self::PowerCycleStateMachineType => "PowerCycleStateMachineType",
            Self::PrepareForUpdateStateMachineType => "PrepareForUpdateStateMachineType",
            Self::ProductCode => "ProductCode",
            Self::ProductInstanceUri => "ProductInstanceUri",
            Self::ProfileIdentifier => "<ProfileIdentifier>",
            Self::ProtocolSupport => "ProtocolSupport",
            Self::ProtocolSupportIdentifier => "<ProtocolSupportIdentifier>",
            Self::ProtocolType => "ProtocolType",
            Self::RemainingLockTime => "RemainingLockTime",
            Self::RenewLock => "RenewLock",
            Self::RevisionCounter => "RevisionCounter",
            Self::SerialNumber => "SerialNumber",
            Self::SoftwareLoadingType => "SoftwareLoadingType",
            Self::SoftwareRevision => "SoftwareRevision",
            Self::SoftwareType => "SoftwareType",
            Self::SoftwareUpdateType => "SoftwareUpdateType",
            Self::SoftwareVersionFileType => "SoftwareVersionFileType",
            Self::SoftwareVersionType => "SoftwareVersionType",
            Self::StartValue => "StartValue",
            Self::SupportedTypes => "SupportedTypes",
            Self::TargetMode => "TargetMode",
            Self::TopologyElementType => "TopologyElementType",
            Self::TransferFromDevice => "TransferFromDevice",
            Self::TransferResultDataDataType => "TransferResultDataDataType",
            Self::TransferResultErrorDataType => "TransferResultErrorDataType",
            Self::TransferServicesType => "TransferServicesType",
            Self::TransferToDevice => "TransferToDevice",
            Self::UIElement => "UIElement",
            Self::UIElementType => "UIElementType",
            Self::UpdateBehavior => "UpdateBehavior",
        }
    }
    /// The browse name qualified with the given namespace index.
    pub fn qualified_name(&self, namespace_index: u16) -> opcua_types::QualifiedName {
        opcua_types::QualifiedName::new(namespace_index, self.as_str())
    }
}
impl std::fmt::Display for BrowseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl<'a> TryFrom<&'a str> for BrowseName {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(
            match value {
                "ActualMode" => Self::ActualMode,
                "AssetId" => Self::AssetId,
                "BlockType" => Self::BlockType,
                "BreakLock" => Self::BreakLock,
                "CachedLoadingType" => Self::CachedLoadingType,
                "CheckFunctionAlarmType" => Self::CheckFunctionAlarmType,
                "ComponentName" => Self::ComponentName,
                "ComponentType" => Self::ComponentType,
                "ConfigurableObjectType" => Self::ConfigurableObjectType,
                "ConfirmationStateMachineType" => Self::ConfirmationStateMachineType,
                "ConnectionPointType" => Self::ConnectionPointType,
                "ConnectsTo" => Self::ConnectsTo,
                "ConnectsToParent" => Self::ConnectsToParent,
                "<CPIdentifier>" => Self::CPIdentifier,
                "DeviceClass" => Self::DeviceClass,
                "DeviceFeatures" => Self::DeviceFeatures,
                "DeviceHealth" => Self::DeviceHealth,
                "DeviceHealthAlarms" => Self::DeviceHealthAlarms,
                "DeviceHealthDiagnosticAlarmType" => Self::DeviceHealthDiagnosticAlarmType,
                "DeviceHealthEnumeration" => Self::DeviceHealthEnumeration,
                "DeviceManual" => Self::DeviceManual,
                "DeviceRevision" => Self::DeviceRevision,
                "DeviceSet" => Self::DeviceSet,
                "DeviceTopology" => Self::DeviceTopology,
                "DeviceType" => Self::DeviceType,
                "DeviceTypeImage" => Self::DeviceTypeImage,
                "DirectLoadingType" => Self::DirectLoadingType,
                "Documentation" => Self::Documentation,
                "<DocumentIdentifier>" => Self::DocumentIdentifier,
                "ExitLock" => Self::ExitLock,
                "FailureAlarmType" => Self::FailureAlarmType,
                "FetchResultDataType" => Self::FetchResultDataType,
                "FetchTransferResultData" => Self::FetchTransferResultData,
                "FileSystemLoadingType" => Self::FileSystemLoadingType,
                "FunctionalGroupType" => Self::FunctionalGroupType,
                "<GroupIdentifier>" => Self::GroupIdentifier,
                "HardwareRevision" => Self::HardwareRevision,
                "Identification" => Self::Identification,
                "IDeviceHealthType" => Self::IDeviceHealthType,
                "<ImageIdentifier>" => Self::ImageIdentifier,
                "ImageSet" => Self::ImageSet,
                "InitLock" => Self::InitLock,
                "InstallationStateMachineType" => Self::InstallationStateMachineType,
                "IsOnline" => Self::IsOnline,
                "ISupportInfoType" => Self::ISupportInfoType,
                "ITagNameplateType" => Self::ITagNameplateType,
                "IVendorNameplateType" => Self::IVendorNameplateType,
                "LifetimeVariableType" => Self::LifetimeVariableType,
                "LimitValue" => Self::LimitValue,
                "Lock" => Self::Lock,
                "Locked" => Self::Locked,
                "LockingClient" => Self::LockingClient,
                "LockingServicesType" => Self::LockingServicesType,
                "LockingUser" => Self::LockingUser,
                "MaintenanceRequiredAlarmType" => Self::MaintenanceRequiredAlarmType,
                "Manufacturer" => Self::Manufacturer,
                "ManufacturerUri" => Self::ManufacturerUri,
                "MethodSet" => Self::MethodSet,
                "Model" => Self::Model,
                "NetworkAddress" => Self::NetworkAddress,
                "NetworkSet" => Self::NetworkSet,
                "NetworkType" => Self::NetworkType,
                "NormalMode" => Self::NormalMode,
                "<ObjectIdentifier>" => Self::ObjectIdentifier,
                "OffSpecAlarmType" => Self::OffSpecAlarmType,
                "OnlineAccess" => Self::OnlineAccess,
                "Opc.Ua.Di" => Self::OpcUaDiBinarySchema,
                "http://opcfoundation.org/UA/DI/" => Self::OPCUADINamespaceMetadata,
                "PackageLoadingType" => Self::PackageLoadingType,
                "<ParameterIdentifier>" => Self::ParameterIdentifier,
                "ParameterResultDataType" => Self::ParameterResultDataType,
                "ParameterSet" => Self::ParameterSet,
                "PermittedMode" => Self::PermittedMode,
                "PowerCycleStateMachineType" => Self::PowerCycleStateMachineType,
                "PrepareForUpdateStateMachineType" => Self::PrepareForUpdateStateMachineType,
                "ProductCode" => Self::ProductCode,
                "ProductInstanceUri" => Self::ProductInstanceUri,
                "<ProfileIdentifier>" => Self::ProfileIdentifier,
                "ProtocolSupport" => Self::ProtocolSupport,
                "<ProtocolSupportIdentifier>" => Self::ProtocolSupportIdentifier,
                "ProtocolType" => Self::ProtocolType,
                "RemainingLockTime" => Self::RemainingLockTime,
                "RenewLock" => Self::RenewLock,
                "RevisionCounter" => Self::RevisionCounter,
                "SerialNumber" => Self::SerialNumber,
                "SoftwareLoadingType" => Self::SoftwareLoadingType,
                "SoftwareRevision" => Self::SoftwareRevision,
                "SoftwareType" => Self::SoftwareType,
                "SoftwareUpdateType" => Self::SoftwareUpdateType,
                "SoftwareVersionFileType" => Self::SoftwareVersionFileType,
                "SoftwareVersionType" => Self::SoftwareVersionType,
                "StartValue" => Self::StartValue,
                "SupportedTypes" => Self::SupportedTypes,
                "TargetMode" => Self::TargetMode,
                "TopologyElementType" => Self::TopologyElementType,
                "TransferFromDevice" => Self::TransferFromDevice,
                "TransferResultDataDataType" => Self::TransferResultDataDataType,
                "TransferResultErrorDataType" => Self::TransferResultErrorDataType,
                "TransferServicesType" => Self::TransferServicesType,
                "TransferToDevice" => Self::TransferToDevice,
                "UIElement" => Self::UIElement,
                "UIElementType" => Self::UIElementType,
                "UpdateBehavior" => Self::UpdateBehavior,
                _ => return Err(()),
            },
        )
    }
}
