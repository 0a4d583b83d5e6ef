use objavi::{
    Config, ConfigError, DebugMode, PageProfile, ServerProfile, TextDirection,
    constants::{
        BOOK_LIST_CACHE_SECS, CHAPTER_COOKIE_CHARS, DEFAULT_SERVER, POINT_2_MM, mm_to_pt, pt_to_mm,
    },
};

#[test]
fn test_builtin_config_is_valid() {
    let config = Config::builtin();
    config.validate().expect("Built-in configuration should validate");

    assert_eq!(config.default_server(), Some(DEFAULT_SERVER));
    assert_eq!(config.publish_url(), "/books/");
    assert!(config.keep_temp_files());
    assert_eq!(config.tmp_dir(), std::path::Path::new("tmp"));
    assert_eq!(config.cache().book_list_secs, BOOK_LIST_CACHE_SECS);
    assert_eq!(config.cache().book_list_ttl().as_secs(), 7200);
    assert_eq!(config.cache().dir, "cache");
    assert_eq!(config.chapter_cookie_chars().as_str(), CHAPTER_COOKIE_CHARS);
}

#[test]
fn test_all_servers_have_direction_and_language() {
    let config = Config::builtin();
    let names = config.server_names();
    assert_eq!(names.len(), 6);

    for host in names {
        let profile = config.get_server_profile(host).expect("Registered server");
        assert!(matches!(profile.dir, TextDirection::Ltr | TextDirection::Rtl));
        assert!(!profile.lang.is_empty());
        assert_eq!(profile.css, format!("static/{}.css", host));
    }
}

#[test]
fn test_persian_server_is_right_to_left() {
    let config = Config::builtin();
    let profile = config.get_server_profile("fa.flossmanuals.net").unwrap();
    assert_eq!(profile.lang, "fa");
    assert_eq!(profile.dir, TextDirection::Rtl);
    assert_eq!(profile.dir.as_html(), "rtl");

    let english = config.get_server_profile("en.flossmanuals.net").unwrap();
    assert!(!english.dir.is_rtl());
    assert_eq!(english.dir.to_string(), "LTR");
}

#[test]
fn test_unknown_server_falls_back_to_default() {
    let config = Config::builtin();
    let fallback = config.get_server_profile("unknown.example.org").unwrap();
    let default = config.get_server_profile("en.flossmanuals.net").unwrap();
    assert_eq!(fallback, default);
}

#[test]
fn test_unknown_server_without_default_is_error() {
    let config = Config::builtin()
        .with_default_server(None)
        .expect("Removing the default server is allowed");

    match config.get_server_profile("unknown.example.org") {
        Err(ConfigError::UnknownServer(host)) => assert_eq!(host, "unknown.example.org"),
        other => panic!("Expected UnknownServer, got: {:?}", other),
    }
    assert!(config.get_server_profile("fr.flossmanuals.net").is_ok());
}

#[test]
fn test_default_server_must_be_registered() {
    let result = Config::builtin().with_default_server(Some("missing.example.org"));
    match result {
        Err(ConfigError::InvalidDefaultServer(host)) => assert_eq!(host, "missing.example.org"),
        other => panic!("Expected InvalidDefaultServer, got: {:?}", other),
    }
}

#[test]
fn test_page_profiles_geometry() {
    let config = Config::builtin();
    assert_eq!(config.page_size_names(), vec!["COMICBOOK", "COMICBOOK2"]);

    for name in config.page_size_names() {
        let profile = config.get_page_profile(name).unwrap();
        assert_eq!(profile.wkmargins.len(), 4);
        assert!(profile.wkmargins.iter().all(|m| *m >= 0.0));
        assert_eq!(profile.pointsize.len(), 2);
        assert!(profile.pointsize.iter().all(|d| *d > 0.0));
    }
}

#[test]
fn test_comicbook_profile() {
    let config = Config::builtin();
    let comic = config.get_page_profile("COMICBOOK").unwrap();
    assert_eq!(comic.wksize, "B5");
    assert_eq!(comic.shift, 20.0);
    assert_eq!(comic.wkmargins, [20.0, 30.0, 20.0, 30.0]);
    assert_eq!(comic.numberpos, [50.0, 40.0]);
    assert_eq!(comic.pointsize, [477.0, 738.0]);

    let comic2 = config.get_page_profile("COMICBOOK2").unwrap();
    assert_eq!(comic2.wksize, "A4");
    assert_eq!(comic2.wkmargins, [45.0; 4]);
}

#[test]
fn test_unknown_page_size_is_error() {
    let config = Config::builtin();
    match config.get_page_profile("NONEXISTENT") {
        Err(ConfigError::UnknownPageSize(name)) => assert_eq!(name, "NONEXISTENT"),
        other => panic!("Expected UnknownPageSize, got: {:?}", other),
    }
}

#[test]
fn test_page_profile_unit_conversion() {
    let config = Config::builtin();
    let comic = config.get_page_profile("COMICBOOK").unwrap();

    let margins = comic.margins_pt();
    assert!((margins[0] - 20.0 / POINT_2_MM).abs() < 1e-9);
    assert!((margins[1] - 30.0 / POINT_2_MM).abs() < 1e-9);

    // 6.625in = 168.275mm
    assert!((comic.width_mm() - 168.275).abs() < 1e-6);
    assert!((comic.height_mm() - 260.35).abs() < 1e-6);
}

#[test]
fn test_unit_conversion() {
    assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-9);
    assert!((pt_to_mm(72.0) - 25.4).abs() < 1e-9);
}

#[test]
fn test_negative_margin_rejected() {
    let profile = PageProfile {
        wksize: "A5".to_string(),
        wkmargins: [10.0, -1.0, 10.0, 10.0],
        numberpos: [50.0, 40.0],
        shift: 0.0,
        pointsize: [420.0, 595.0],
    };

    match Config::builtin().with_page_size("BROKEN", profile) {
        Err(ConfigError::InvalidPageProfile { name, .. }) => assert_eq!(name, "BROKEN"),
        other => panic!("Expected InvalidPageProfile, got: {:?}", other),
    }
}

#[test]
fn test_zero_page_dimension_rejected() {
    let profile = PageProfile::from_inches("A5", [10.0; 4], [50.0, 40.0], 0.0, 0.0, 8.0);
    assert!(matches!(
        Config::builtin().with_page_size("FLAT", profile),
        Err(ConfigError::InvalidPageProfile { .. })
    ));
}

#[test]
fn test_added_server_profile() {
    let config = Config::builtin()
        .with_server(
            "ar.flossmanuals.net",
            ServerProfile::new("static/ar.flossmanuals.net.css", "ar", TextDirection::Rtl),
        )
        .expect("Valid server profile");

    let profile = config.get_server_profile("ar.flossmanuals.net").unwrap();
    assert_eq!(profile.lang, "ar");
    assert!(profile.dir.is_rtl());
}

#[test]
fn test_empty_language_rejected() {
    let result = Config::builtin().with_server(
        "xx.flossmanuals.net",
        ServerProfile::new("static/xx.css", "", TextDirection::Ltr),
    );
    match result {
        Err(ConfigError::InvalidServerProfile { host, .. }) => {
            assert_eq!(host, "xx.flossmanuals.net")
        }
        other => panic!("Expected InvalidServerProfile, got: {:?}", other),
    }
}

#[test]
fn test_malformed_hostname_rejected() {
    let result = Config::builtin().with_server(
        "not a host",
        ServerProfile::new("static/x.css", "en", TextDirection::Ltr),
    );
    assert!(matches!(result, Err(ConfigError::InvalidServerProfile { .. })));
}

#[test]
fn test_format_urls() {
    let config = Config::builtin();

    assert_eq!(
        config.format_toc_url("en.flossmanuals.net", "MyBook"),
        "http://en.flossmanuals.net/pub/MyBook/_index/TOC.txt"
    );
    assert_eq!(
        config.format_book_url("en.flossmanuals.net", "MyBook"),
        "http://en.flossmanuals.net/bin/view/MyBook/_all?skin=text"
    );
}

#[test]
fn test_engine_options() {
    let config = Config::builtin();
    assert_eq!(config.engine_names(), vec!["webkit"]);
    assert!(config.engine_options("webkit").unwrap().is_empty());

    match config.engine_options("gecko") {
        Err(ConfigError::UnknownEngine(name)) => assert_eq!(name, "gecko"),
        other => panic!("Expected UnknownEngine, got: {:?}", other),
    }
}

#[test]
fn test_debug_disabled_by_default() {
    let config = Config::builtin();
    for mode in DebugMode::ALL {
        assert!(!config.is_debug_enabled(mode));
    }
}

#[test]
fn test_config_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();

    let config = std::sync::Arc::new(Config::builtin());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || config.get_page_profile("COMICBOOK").unwrap().shift)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 20.0);
    }
}
