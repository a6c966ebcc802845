use abac_common::{attributes, hash_name, zero_value};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, Vec};

use crate::{AttributeRegistryContract, AttributeRegistryContractClient, RegistryError};

fn setup() -> (Env, AttributeRegistryContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AttributeRegistryContract, ());
    let client = AttributeRegistryContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

#[test]
fn initialize_sets_admin_once() {
    let (env, client, admin) = setup();
    assert!(client.is_initialized());
    assert_eq!(client.get_admin(), admin);

    assert_eq!(
        client.try_initialize(&Address::generate(&env)),
        Err(Ok(RegistryError::AlreadyInitialized))
    );
}

#[test]
fn subject_declares_own_attribute() {
    let (env, client, _admin) = setup();
    let subject = Address::generate(&env);
    let key = attributes::sub_role(&env);
    let value = hash_name(&env, "employee");

    assert!(!client.is_subject_registered(&subject));
    client.set_subject_attribute(&subject, &subject, &key, &value);

    assert_eq!(client.subject_attr(&subject, &key), value);
    assert!(client.is_subject_registered(&subject));
}

#[test]
fn admin_writes_subject_attribute_for_another() {
    let (env, client, admin) = setup();
    let subject = Address::generate(&env);
    let key = attributes::sub_dept(&env);
    let value = hash_name(&env, "facilities");

    client.set_subject_attribute(&admin, &subject, &key, &value);
    assert_eq!(client.subject_attr(&subject, &key), value);
}

#[test]
fn third_party_cannot_write_subject_attribute() {
    let (env, client, _admin) = setup();
    let subject = Address::generate(&env);
    let stranger = Address::generate(&env);
    let key = attributes::sub_role(&env);
    let value = hash_name(&env, "admin");

    assert_eq!(
        client.try_set_subject_attribute(&stranger, &subject, &key, &value),
        Err(Ok(RegistryError::NotAuthorized))
    );
    assert!(!client.is_subject_registered(&subject));
}

#[test]
fn object_attributes_are_admin_only() {
    let (env, client, admin) = setup();
    let object = Address::generate(&env);
    let key = attributes::obj_resource_type(&env);
    let value = hash_name(&env, "doorLock");

    // The object identifier itself has no write rights.
    assert_eq!(
        client.try_set_object_attribute(&object, &object, &key, &value),
        Err(Ok(RegistryError::NotAuthorized))
    );

    client.set_object_attribute(&admin, &object, &key, &value);
    assert_eq!(client.object_attr(&object, &key), value);
    assert!(client.is_object_registered(&object));
}

#[test]
fn missing_attribute_reads_zero() {
    let (env, client, _admin) = setup();
    let subject = Address::generate(&env);
    let key = attributes::sub_office(&env);

    assert_eq!(client.subject_attr(&subject, &key), zero_value(&env));
    assert_eq!(client.object_attr(&subject, &key), zero_value(&env));
}

#[test]
fn last_writer_wins() {
    let (env, client, _admin) = setup();
    let subject = Address::generate(&env);
    let key = attributes::sub_location(&env);

    client.set_subject_attribute(&subject, &subject, &key, &hash_name(&env, "locationA"));
    client.set_subject_attribute(&subject, &subject, &key, &hash_name(&env, "locationB"));

    assert_eq!(
        client.subject_attr(&subject, &key),
        hash_name(&env, "locationB")
    );
}

#[test]
fn batch_write_applies_all_or_nothing() {
    let (env, client, admin) = setup();
    let object = Address::generate(&env);
    let keys = vec![
        &env,
        attributes::obj_resource_type(&env),
        attributes::obj_location(&env),
    ];
    let values = vec![&env, hash_name(&env, "doorLock")];

    assert_eq!(
        client.try_set_object_attributes(&admin, &object, &keys, &values),
        Err(Ok(RegistryError::LengthMismatch))
    );
    assert_eq!(
        client.object_attr(&object, &attributes::obj_resource_type(&env)),
        zero_value(&env)
    );
    assert!(!client.is_object_registered(&object));

    let values = vec![
        &env,
        hash_name(&env, "doorLock"),
        hash_name(&env, "locationA"),
    ];
    client.set_object_attributes(&admin, &object, &keys, &values);

    assert_eq!(
        client.object_attr(&object, &attributes::obj_resource_type(&env)),
        hash_name(&env, "doorLock")
    );
    assert_eq!(
        client.object_attr(&object, &attributes::obj_location(&env)),
        hash_name(&env, "locationA")
    );
}

#[test]
fn empty_batch_marks_subject_registered() {
    let (env, client, _admin) = setup();
    let subject = Address::generate(&env);
    let empty: Vec<soroban_sdk::BytesN<32>> = Vec::new(&env);

    client.set_subject_attributes(&subject, &subject, &empty, &empty);
    assert!(client.is_subject_registered(&subject));
}

#[test]
fn admin_transfer_is_two_step() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    assert_eq!(client.get_pending_admin(), Some(successor.clone()));
    // Still the old admin until the successor accepts.
    assert_eq!(client.get_admin(), admin);

    // Only the proposed admin may accept.
    let stranger = Address::generate(&env);
    assert_eq!(
        client.try_accept_admin(&stranger),
        Err(Ok(RegistryError::NotAuthorized))
    );

    client.accept_admin(&successor);
    assert_eq!(client.get_admin(), successor);
    assert_eq!(client.get_pending_admin(), None);

    // The former admin has lost object-write rights.
    let object = Address::generate(&env);
    assert_eq!(
        client.try_set_object_attribute(
            &admin,
            &object,
            &attributes::obj_sensitivity(&env),
            &hash_name(&env, "restricted"),
        ),
        Err(Ok(RegistryError::NotAuthorized))
    );
}

#[test]
fn pause_blocks_writes_but_not_reads() {
    let (env, client, admin) = setup();
    let subject = Address::generate(&env);
    let key = attributes::sub_role(&env);
    let value = hash_name(&env, "employee");

    client.set_subject_attribute(&subject, &subject, &key, &value);
    client.set_paused(&admin, &true);
    assert!(client.is_paused());

    assert_eq!(
        client.try_set_subject_attribute(&subject, &subject, &key, &value),
        Err(Ok(RegistryError::Paused))
    );
    assert_eq!(client.subject_attr(&subject, &key), value);

    client.set_paused(&admin, &false);
    client.set_subject_attribute(&subject, &subject, &key, &hash_name(&env, "contractor"));
    assert_eq!(
        client.subject_attr(&subject, &key),
        hash_name(&env, "contractor")
    );
}
