use identity::{DisplayContext, DisplayResolver, IdentityConfig, Profile, Role};

const ALL_CONTEXTS: [DisplayContext; 4] = [
    DisplayContext::Marketplace,
    DisplayContext::Messaging,
    DisplayContext::Profile,
    DisplayContext::Navigation,
];

const ALL_ROLES: [Option<Role>; 4] = [
    None,
    Some(Role::Admin),
    Some(Role::Supplier),
    Some(Role::Buyer),
];

fn resolver() -> DisplayResolver {
    DisplayResolver::new(IdentityConfig::default())
}

fn profile(full_name: Option<&str>, company_name: Option<&str>) -> Profile {
    Profile {
        full_name: full_name.map(str::to_string),
        company_name: company_name.map(str::to_string),
        ..Profile::default()
    }
}

#[test]
fn valid_full_name_overrides_every_context_and_role() {
    let r = resolver();
    let p = profile(Some("Adam Buerer"), Some("Acme Packaging"));

    for context in ALL_CONTEXTS {
        for role in ALL_ROLES {
            assert_eq!(
                r.display_name(Some(&p), role, context),
                "Adam B",
                "context {:?} role {:?}",
                context,
                role
            );
        }
    }
}

#[test]
fn placeholder_full_name_is_treated_as_absent() {
    let r = resolver();
    let p = profile(Some("New User"), Some("Acme"));

    assert_eq!(
        r.display_name(Some(&p), Some(Role::Supplier), DisplayContext::Marketplace),
        "Acme"
    );
}

#[test]
fn missing_profile_resolves_to_account_and_a() {
    let r = resolver();
    assert_eq!(
        r.display_name(None, None, DisplayContext::Navigation),
        "Account"
    );
    assert_eq!(r.fallback_initial(None, None, DisplayContext::Navigation), 'A');
    assert_eq!(r.display_image(None, None, DisplayContext::Navigation), None);
}

#[test]
fn empty_profile_resolves_to_account_everywhere() {
    let r = resolver();
    let p = profile(None, None);

    for context in ALL_CONTEXTS {
        for role in ALL_ROLES {
            assert_eq!(
                r.display_name(Some(&p), role, context),
                "Account",
                "context {:?} role {:?}",
                context,
                role
            );
            assert_eq!(r.fallback_initial(Some(&p), role, context), 'A');
            assert_eq!(r.display_image(Some(&p), role, context), None);
        }
    }
}

#[test]
fn resolution_is_pure() {
    let r = resolver();
    let p = profile(Some("  John   Q Public  "), Some("Boxes R Us"));

    for context in ALL_CONTEXTS {
        for role in ALL_ROLES {
            let first = r.display_name(Some(&p), role, context);
            let second = r.display_name(Some(&p), role, context);
            assert_eq!(first, second);
            assert_eq!(first, "John P");
        }
    }
}

#[test]
fn messaging_falls_back_to_company_name() {
    let r = resolver();
    let p = profile(None, Some("  Acme Packaging  "));

    assert_eq!(
        r.display_name(Some(&p), Some(Role::Buyer), DisplayContext::Messaging),
        "Acme Packaging"
    );
}

#[test]
fn marketplace_suppliers_and_buyers_show_company_name() {
    let r = resolver();
    let p = profile(None, Some("Acme"));

    for role in [Role::Supplier, Role::Buyer] {
        assert_eq!(
            r.display_name(Some(&p), Some(role), DisplayContext::Marketplace),
            "Acme"
        );
    }
}

#[test]
fn marketplace_admin_without_name_still_falls_back_to_company() {
    // The admin row only lists the personal name; the shared default chain
    // picks the company up afterwards rather than jumping straight to
    // "Account".
    let r = resolver();
    let p = profile(None, Some("Acme"));

    assert_eq!(
        r.display_name(Some(&p), Some(Role::Admin), DisplayContext::Marketplace),
        "Acme"
    );
}

#[test]
fn profile_context_splits_by_role() {
    let r = resolver();
    let p = profile(None, Some("Acme"));

    assert_eq!(
        r.display_name(Some(&p), Some(Role::Supplier), DisplayContext::Profile),
        "Acme"
    );
    assert_eq!(
        r.display_name(Some(&p), Some(Role::Buyer), DisplayContext::Profile),
        "Acme"
    );
}

#[test]
fn whitespace_only_fields_fall_through() {
    let r = resolver();
    let p = profile(Some("   "), Some("\t "));

    assert_eq!(
        r.display_name(Some(&p), Some(Role::Supplier), DisplayContext::Marketplace),
        "Account"
    );
    assert_eq!(
        r.fallback_initial(Some(&p), Some(Role::Supplier), DisplayContext::Marketplace),
        'A'
    );
}

#[test]
fn email_is_never_used_for_display() {
    let r = resolver();
    let p = Profile {
        email: Some("adam@acme.example".to_string()),
        ..Profile::default()
    };

    for context in ALL_CONTEXTS {
        for role in ALL_ROLES {
            let shown = r.display_name(Some(&p), role, context);
            assert_eq!(shown, "Account");
            assert!(!shown.contains('@'));
        }
    }
}

#[test]
fn supplier_initial_comes_from_company_name() {
    let r = resolver();
    let p = profile(Some("rita Marsh"), Some("boxline supply"));

    assert_eq!(
        r.fallback_initial(Some(&p), Some(Role::Supplier), DisplayContext::Marketplace),
        'B'
    );
    // Messaging stays personal even for suppliers.
    assert_eq!(
        r.fallback_initial(Some(&p), Some(Role::Supplier), DisplayContext::Messaging),
        'R'
    );
}

#[test]
fn placeholder_name_yields_no_initial() {
    let r = resolver();
    let p = profile(Some("New User"), Some("acme"));

    assert_eq!(
        r.fallback_initial(Some(&p), Some(Role::Buyer), DisplayContext::Navigation),
        'A'
    );
}

#[test]
fn image_precedence_per_context() {
    let r = resolver();
    let p = Profile {
        avatar_url: Some("https://cdn.example/adam.png".to_string()),
        company_logo_url: Some("https://cdn.example/acme.svg".to_string()),
        ..Profile::default()
    };

    assert_eq!(
        r.display_image(Some(&p), Some(Role::Supplier), DisplayContext::Messaging),
        Some("https://cdn.example/adam.png")
    );
    assert_eq!(
        r.display_image(Some(&p), Some(Role::Buyer), DisplayContext::Marketplace),
        Some("https://cdn.example/acme.svg")
    );
    assert_eq!(
        r.display_image(Some(&p), Some(Role::Admin), DisplayContext::Marketplace),
        Some("https://cdn.example/adam.png")
    );
    assert_eq!(
        r.display_image(Some(&p), Some(Role::Supplier), DisplayContext::Navigation),
        Some("https://cdn.example/acme.svg")
    );
    assert_eq!(
        r.display_image(Some(&p), None, DisplayContext::Navigation),
        Some("https://cdn.example/adam.png")
    );
}

#[test]
fn image_chain_skips_only_missing_fields() {
    let r = resolver();
    let p = Profile {
        avatar_url: None,
        company_logo_url: Some("https://cdn.example/acme.svg".to_string()),
        ..Profile::default()
    };

    assert_eq!(
        r.display_image(Some(&p), Some(Role::Admin), DisplayContext::Profile),
        Some("https://cdn.example/acme.svg")
    );

    // Nullish-coalescing semantics: an empty string is a present value.
    let p = Profile {
        avatar_url: Some(String::new()),
        company_logo_url: Some("https://cdn.example/acme.svg".to_string()),
        ..Profile::default()
    };
    assert_eq!(
        r.display_image(Some(&p), Some(Role::Admin), DisplayContext::Profile),
        Some("")
    );
}

#[test]
fn contract_enums_use_lowercase_wire_names() {
    let role: Role = serde_json::from_str("\"supplier\"").expect("role should parse");
    assert_eq!(role, Role::Supplier);

    let context: DisplayContext =
        serde_json::from_str("\"marketplace\"").expect("context should parse");
    assert_eq!(context, DisplayContext::Marketplace);

    let profile: Profile = serde_json::from_str("{}").expect("empty profile should parse");
    assert_eq!(profile, Profile::default());
}
