use std::collections::HashSet;

use opcua_types::{ExpandedNodeId, Identifier, NamespaceMap, NodeId, QualifiedName};

use crate::{
    BrowseName, DataTypeId, IdentifierTable, MethodId, ObjectId, ObjectTypeId, ReferenceTypeId,
    VariableId, VariableTypeId, DI_NAMESPACE_URI,
};

fn check_table<T: IdentifierTable + PartialEq + std::fmt::Debug>() {
    assert!(!T::ALL.is_empty());
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for entry in T::ALL {
        assert!(ids.insert(entry.id()), "duplicate id {}", entry.id());
        assert!(names.insert(entry.name()), "duplicate name {}", entry.name());
        assert_eq!(T::from_id(entry.id()), Some(*entry));
        assert_eq!(T::from_name(entry.name()), Some(*entry));
    }
}

#[test]
fn tables_are_injective() {
    check_table::<DataTypeId>();
    check_table::<MethodId>();
    check_table::<ObjectId>();
    check_table::<ObjectTypeId>();
    check_table::<ReferenceTypeId>();
    check_table::<VariableId>();
    check_table::<VariableTypeId>();
}

#[test]
fn conversions_agree() {
    for entry in ObjectId::ALL {
        assert_eq!(ObjectId::try_from(entry.id()), Ok(*entry));
        assert_eq!(ObjectId::try_from(entry.name()), Ok(*entry));
    }
    assert_eq!(DataTypeId::try_from(1u32), Err(()));
    assert_eq!(DataTypeId::try_from("NotAType"), Err(()));
    assert_eq!(ObjectId::from_id(0), None);
}

#[test]
fn data_type_ids() {
    assert_eq!(DataTypeId::DeviceHealthEnumeration as u32, 6244);
    assert_eq!(DataTypeId::FetchResultDataType.id(), 6522);
    assert_eq!(DataTypeId::ParameterResultDataType.id(), 6525);
    assert_eq!(DataTypeId::TransferResultErrorDataType.id(), 15888);
    assert_eq!(DataTypeId::TransferResultDataDataType.id(), 15889);
    assert_eq!(
        DataTypeId::from_name("DeviceHealthEnumeration"),
        Some(DataTypeId::DeviceHealthEnumeration)
    );
}

#[test]
fn encoding_ids() {
    let table = [
        (ObjectId::FetchResultDataType_Encoding_DefaultBinary, 6551),
        (ObjectId::FetchResultDataType_Encoding_DefaultXml, 6535),
        (ObjectId::FetchResultDataType_Encoding_DefaultJson, 15909),
        (ObjectId::TransferResultErrorDataType_Encoding_DefaultBinary, 15891),
        (ObjectId::TransferResultErrorDataType_Encoding_DefaultXml, 15900),
        (ObjectId::TransferResultErrorDataType_Encoding_DefaultJson, 15910),
        (ObjectId::TransferResultDataDataType_Encoding_DefaultBinary, 15892),
        (ObjectId::TransferResultDataDataType_Encoding_DefaultXml, 15901),
        (ObjectId::TransferResultDataDataType_Encoding_DefaultJson, 15911),
        (ObjectId::ParameterResultDataType_Encoding_DefaultBinary, 6554),
        (ObjectId::ParameterResultDataType_Encoding_DefaultXml, 6538),
        (ObjectId::ParameterResultDataType_Encoding_DefaultJson, 15912),
    ];
    for (id, value) in table {
        assert_eq!(id.id(), value, "{}", id.name());
    }
}

#[test]
fn interfaces_and_software_update_types() {
    let table = [
        (ObjectTypeId::IVendorNameplateType, 15035),
        (ObjectTypeId::ITagNameplateType, 15048),
        (ObjectTypeId::IDeviceHealthType, 15051),
        (ObjectTypeId::ISupportInfoType, 15054),
        (ObjectTypeId::SoftwareUpdateType, 1),
        (ObjectTypeId::PackageLoadingType, 135),
        (ObjectTypeId::SoftwareVersionType, 212),
    ];
    for (id, value) in table {
        assert_eq!(id.id(), value, "{}", id.name());
        assert_eq!(ObjectTypeId::try_from(value), Ok(id));
    }

    assert_eq!(VariableId::IVendorNameplateType_Manufacturer.id(), 15036);
    assert_eq!(VariableId::IVendorNameplateType_RevisionCounter.id(), 15047);
    assert_eq!(VariableId::ITagNameplateType_AssetId.id(), 15049);
    assert_eq!(VariableId::IDeviceHealthType_DeviceHealth.id(), 15052);
    assert_eq!(ObjectId::IDeviceHealthType_DeviceHealthAlarms.id(), 15053);
    assert_eq!(VariableId::LockingServicesType_Locked.id(), 6534);
    assert_eq!(
        VariableId::from_name("LockingServicesType_InitLock_InputArguments"),
        Some(VariableId::LockingServicesType_InitLock_InputArguments)
    );
    assert_eq!(
        BrowseName::try_from("DeviceHealthAlarms"),
        Ok(BrowseName::DeviceHealthAlarms)
    );
    assert_eq!(BrowseName::ImageIdentifier.as_str(), "<ImageIdentifier>");
}

#[test]
fn expanded_ids_carry_the_namespace_uri() {
    let id: ExpandedNodeId = DataTypeId::DeviceHealthEnumeration.into();
    assert_eq!(id.namespace_uri.as_ref(), DI_NAMESPACE_URI);
    assert_eq!(id.node_id.namespace, 0);
    assert_eq!(id.node_id.identifier, Identifier::Numeric(6244));
    assert_eq!(id.server_index, 0);

    let by_ref: ExpandedNodeId = (&MethodId::TransferServicesType_FetchTransferResultData).into();
    assert_eq!(by_ref.node_id.as_u32(), Some(6531));
}

#[test]
fn node_id_in_namespace_table() {
    let mut namespaces = NamespaceMap::new();
    assert_eq!(ObjectId::DeviceSet.node_id(&namespaces), None);

    namespaces.add_namespace("urn:some:other:model");
    let index = namespaces.add_namespace(DI_NAMESPACE_URI);
    assert_eq!(index, 2);
    assert_eq!(
        ObjectId::DeviceSet.node_id(&namespaces),
        Some(NodeId::new(2, 5001u32))
    );

    let expanded = ObjectId::DeviceSet.expanded_node_id();
    assert_eq!(
        expanded.try_resolve(&namespaces).map(|id| id.into_owned()),
        Some(NodeId::new(2, 5001u32))
    );
}

#[test]
fn browse_names() {
    assert_eq!(BrowseName::DeviceSet.as_str(), "DeviceSet");
    assert_eq!(BrowseName::DeviceSet.to_string(), "DeviceSet");
    assert_eq!(
        BrowseName::try_from("FetchTransferResultData"),
        Ok(BrowseName::FetchTransferResultData)
    );
    assert!(BrowseName::try_from("NoSuchBrowseName").is_err());
    assert_eq!(
        BrowseName::DeviceHealth.qualified_name(3),
        QualifiedName::new(3, "DeviceHealth")
    );

    for name in BrowseName::ALL {
        // Symbols sharing a browse name resolve to the first one.
        let resolved = BrowseName::try_from(name.as_str()).unwrap();
        assert_eq!(resolved.as_str(), name.as_str());
    }
    assert_eq!(
        BrowseName::try_from("Opc.Ua.Di"),
        Ok(BrowseName::OpcUaDiBinarySchema)
    );
}
