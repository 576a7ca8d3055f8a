use rnmap::options::*;
use rnmap::{Result, ScanError, Scanner};
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

fn args_of(options: Vec<ScanOption>) -> Vec<String> {
    Scanner::new(options)
        .expect("options should be valid")
        .args()
        .to_vec()
}

fn assert_args(options: Vec<ScanOption>, expected: &[&str]) {
    assert_eq!(args_of(options), expected);
}

#[test]
fn test_target_specification() {
    assert_args(vec![with_custom_arguments(["--invalid-argument"])], &["--invalid-argument"]);
    assert_args(vec![with_target("0.0.0.0/24")], &["0.0.0.0/24"]);
    assert_args(vec![with_targets(["10.0.0.1", "10.0.0.2"])], &["10.0.0.1", "10.0.0.2"]);
    assert_args(vec![with_target_input("/targets.txt")], &["-iL", "/targets.txt"]);
    assert_args(vec![with_random_targets(4)], &["-iR", "4"]);
    assert_args(
        vec![with_target_exclusion("192.168.0.1,172.16.100.0/24")],
        &["--exclude", "192.168.0.1,172.16.100.0/24"],
    );
    assert_args(
        vec![with_target_exclusion_input("/exclude_targets.txt")],
        &["--excludefile", "/exclude_targets.txt"],
    );
}

#[test]
fn test_host_discovery() {
    assert_args(vec![with_list_scan()], &["-sL"]);
    assert_args(vec![with_ping_scan()], &["-sn"]);
    assert_args(vec![with_skip_host_discovery()], &["-Pn"]);
    assert_args(vec![with_syn_discovery("")], &["-PS"]);
    assert_args(vec![with_syn_discovery("443,8443")], &["-PS443,8443"]);
    assert_args(vec![with_ack_discovery("")], &["-PA"]);
    assert_args(vec![with_ack_discovery("443,8443")], &["-PA443,8443"]);
    assert_args(vec![with_udp_discovery("443,8443")], &["-PU443,8443"]);
    assert_args(vec![with_sctp_discovery("")], &["-PY"]);
    assert_args(vec![with_icmp_echo_discovery()], &["-PE"]);
    assert_args(vec![with_icmp_timestamp_discovery()], &["-PP"]);
    assert_args(vec![with_icmp_netmask_discovery()], &["-PM"]);
    assert_args(vec![with_ip_protocol_ping_discovery("1,2,4")], &["-PO1,2,4"]);
    assert_args(vec![with_disabled_dns_resolution()], &["-n"]);
    assert_args(vec![with_forced_dns_resolution()], &["-R"]);
    assert_args(
        vec![with_custom_dns_servers("8.8.8.8,8.8.4.4")],
        &["--dns-servers", "8.8.8.8,8.8.4.4"],
    );
    assert_args(vec![with_system_dns()], &["--system-dns"]);
    assert_args(vec![with_traceroute()], &["--traceroute"]);
}

#[test]
fn test_scan_techniques() {
    assert_args(vec![with_syn_scan()], &["-sS"]);
    assert_args(vec![with_connect_scan()], &["-sT"]);
    assert_args(vec![with_ack_scan()], &["-sA"]);
    assert_args(vec![with_window_scan()], &["-sW"]);
    assert_args(vec![with_maimon_scan()], &["-sM"]);
    assert_args(vec![with_udp_scan()], &["-sU"]);
    assert_args(vec![with_tcp_null_scan()], &["-sN"]);
    assert_args(vec![with_tcp_fin_scan()], &["-sF"]);
    assert_args(vec![with_tcp_xmas_scan()], &["-sX"]);
    assert_args(vec![with_sctp_init_scan()], &["-sY"]);
    assert_args(vec![with_sctp_cookie_echo_scan()], &["-sZ"]);
    assert_args(vec![with_ip_protocol_scan()], &["-sO"]);
    assert_args(vec![with_idle_scan("192.168.1.1", 61436)], &["-sI", "192.168.1.1:61436"]);
    assert_args(vec![with_idle_scan("192.168.1.1", 0)], &["-sI", "192.168.1.1"]);
    assert_args(vec![with_ftp_bounce_scan("192.168.0.254")], &["-b", "192.168.0.254"]);
}

#[test]
fn test_tcp_scan_flags_decimal_mask() {
    assert_args(
        vec![with_tcp_scan_flags(&[TcpFlag::Ack, TcpFlag::Fin, TcpFlag::Null])],
        &["--scanflags", "17"],
    );
    assert_args(
        vec![with_syn_scan(), with_tcp_scan_flags(&[TcpFlag::Syn, TcpFlag::Urg])],
        &["-sS", "--scanflags", "34"],
    );
}

#[test]
fn test_two_scan_techniques_conflict() {
    let err = Scanner::new(vec![with_syn_scan(), with_udp_scan()]).unwrap_err();

    match &err {
        ScanError::ConflictingOptions { option, previous } => {
            assert_eq!(*option, "with_udp_scan");
            assert_eq!(*previous, "with_syn_scan");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_configuration_error());
    assert_eq!(
        err.to_string(),
        "with_udp_scan() conflicts with previously applied with_syn_scan()"
    );
}

#[test]
fn test_exclusive_categories() {
    let conflicting: Vec<Vec<ScanOption>> = vec![
        vec![with_idle_scan("zombie", 0), with_connect_scan()],
        vec![with_target_input("/a.txt"), with_target_input("/b.txt")],
        vec![with_random_targets(1), with_random_targets(2)],
        vec![with_target_exclusion("10.0.0.1"), with_target_exclusion_input("/ex.txt")],
        vec![with_disabled_dns_resolution(), with_forced_dns_resolution()],
        vec![with_ports("80"), with_fast_mode()],
        vec![with_version_light(), with_version_all()],
        vec![with_timing_template(Timing::Polite), with_timing_level(4)],
        vec![
            with_script_arguments([("a", "1")]),
            with_script_arguments([("b", "2")]),
        ],
    ];

    for options in conflicting {
        let result = Scanner::new(options);
        assert!(
            matches!(result, Err(ScanError::ConflictingOptions { .. })),
            "expected conflict, got {:?}",
            result
        );
    }
}

#[test]
fn test_port_spec_and_scan_order() {
    assert_args(vec![with_ports("554,8554")], &["-p", "554,8554"]);
    assert_args(vec![with_port_exclusions("554,8554")], &["--exclude-ports", "554,8554"]);
    assert_args(vec![with_fast_mode()], &["-F"]);
    assert_args(vec![with_consecutive_port_scanning()], &["-r"]);
    assert_args(vec![with_most_common_ports(5)], &["--top-ports", "5"]);
}

#[test]
fn test_port_ratio_rounds_to_one_decimal() {
    assert_args(vec![with_port_ratio(0.42010101)], &["--port-ratio", "0.4"]);
    assert_args(vec![with_port_ratio(1.0)], &["--port-ratio", "1.0"]);
}

#[test]
fn test_port_ratio_out_of_range() {
    for ratio in [2.0, -0.1, f32::NAN] {
        let err = Scanner::new(vec![with_target("localhost"), with_port_ratio(ratio)]).unwrap_err();
        assert!(err.is_configuration_error());
        assert_eq!(
            err.to_string(),
            "value given to with_port_ratio() should be between 0 and 1"
        );
    }
}

#[test]
fn test_service_detection() {
    assert_args(vec![with_service_info()], &["-sV"]);
    assert_args(vec![with_version_intensity(1)], &["--version-intensity", "1"]);
    assert_args(vec![with_version_intensity(9)], &["--version-intensity", "9"]);
    assert_args(vec![with_version_light()], &["--version-light"]);
    assert_args(vec![with_version_all()], &["--version-all"]);
    assert_args(vec![with_version_trace()], &["--version-trace"]);
}

#[test]
fn test_version_intensity_out_of_range() {
    let err = Scanner::new(vec![
        with_syn_scan(),
        with_version_intensity(42),
        with_target("localhost"),
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        ScanError::InvalidOption { option: "with_version_intensity", range: "0 and 9" }
    ));
    assert_eq!(
        err.to_string(),
        "value given to with_version_intensity() should be between 0 and 9"
    );
}

#[test]
fn test_script_scan() {
    assert_args(vec![with_default_script()], &["-sC"]);
    assert_args(
        vec![with_scripts("./scripts/,/etc/nmap/nse/scripts")],
        &["--script=./scripts/,/etc/nmap/nse/scripts"],
    );
    assert_args(
        vec![with_script_arguments_file("/script_args.txt")],
        &["--script-args-file=/script_args.txt"],
    );
    assert_args(vec![with_script_trace()], &["--script-trace"]);
    assert_args(vec![with_script_update_db()], &["--script-updatedb"]);
}

#[test]
fn test_script_arguments_single_token() {
    let mut script_args = BTreeMap::new();
    script_args.insert("user", "foo");
    script_args.insert("pass", "\",{}=bar\"");
    script_args.insert("whois", "{whodb=nofollow+ripe}");
    script_args.insert("xmpp-info.server_name", "localhost");

    let args = args_of(vec![with_script_arguments(script_args)]);

    assert_eq!(args.len(), 1);
    assert!(args[0].starts_with("--script-args="));
    for expected in [
        "user=foo",
        "pass=\",{}=bar\"",
        "whois={whodb=nofollow+ripe}",
        "xmpp-info.server_name=localhost",
    ] {
        assert!(args[0].contains(expected), "missing {} in {}", expected, args[0]);
    }
}

#[test]
fn test_script_arguments_merge_maps() {
    let first = BTreeMap::from([("a", "1")]);
    let second = BTreeMap::from([("b", "2")]);

    assert_args(
        vec![with_script_arguments(first.into_iter().chain(second))],
        &["--script-args=a=1,b=2"],
    );
}

#[test]
fn test_os_detection() {
    assert_args(vec![with_os_detection()], &["-O"]);
    assert_args(vec![with_os_scan_limit()], &["--osscan-limit"]);
    assert_args(vec![with_os_scan_guess()], &["--osscan-guess"]);
}

#[test]
fn test_timing_and_performance() {
    assert_args(vec![with_timing_template(Timing::Aggressive)], &["-T4"]);
    assert_args(vec![with_timing_level(0)], &["-T0"]);
    assert_args(vec![with_min_hostgroup(8)], &["--min-hostgroup", "8"]);
    assert_args(vec![with_max_hostgroup(64)], &["--max-hostgroup", "64"]);
    assert_args(vec![with_min_parallelism(2)], &["--min-parallelism", "2"]);
    assert_args(vec![with_max_parallelism(10)], &["--max-parallelism", "10"]);
    assert_args(
        vec![with_min_rtt_timeout(Duration::from_millis(100))],
        &["--min-rtt-timeout", "100ms"],
    );
    assert_args(
        vec![with_max_rtt_timeout(Duration::from_secs(2))],
        &["--max-rtt-timeout", "2000ms"],
    );
    assert_args(
        vec![with_initial_rtt_timeout(Duration::from_millis(500))],
        &["--initial-rtt-timeout", "500ms"],
    );
    assert_args(vec![with_max_retries(3)], &["--max-retries", "3"]);
    assert_args(
        vec![with_host_timeout(Duration::from_secs(60))],
        &["--host-timeout", "60000ms"],
    );
    assert_args(vec![with_scan_delay(Duration::from_millis(5))], &["--scan-delay", "5ms"]);
    assert_args(
        vec![with_max_scan_delay(Duration::from_millis(50))],
        &["--max-scan-delay", "50ms"],
    );
    assert_args(vec![with_min_rate(100)], &["--min-rate", "100"]);
    assert_args(vec![with_max_rate(1000)], &["--max-rate", "1000"]);
}

#[test]
fn test_timing_level_out_of_range() {
    let err = Scanner::new(vec![with_timing_level(6)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "value given to with_timing_level() should be between 0 and 5"
    );
}

#[test]
fn test_firewall_evasion_and_spoofing() {
    assert_args(vec![with_fragment_packets()], &["-f"]);
    assert_args(vec![with_mtu(24)], &["--mtu", "24"]);
    assert_args(
        vec![with_decoys(["192.168.1.5", "ME", "10.0.0.3"])],
        &["-D", "192.168.1.5,ME,10.0.0.3"],
    );
    assert_args(
        vec![with_spoof_ip_address(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)))],
        &["-S", "192.168.1.1"],
    );
    assert_args(vec![with_interface("eth0")], &["-e", "eth0"]);
    assert_args(vec![with_source_port(53)], &["-g", "53"]);
    assert_args(
        vec![with_proxies(["http://proxy:8080", "socks4://proxy2:1080"])],
        &["--proxies", "http://proxy:8080,socks4://proxy2:1080"],
    );
    assert_args(vec![with_hex_data("0xdeadbeef")], &["--data", "0xdeadbeef"]);
    assert_args(vec![with_ascii_data("hello")], &["--data-string", "hello"]);
    assert_args(vec![with_data_length(25)], &["--data-length", "25"]);
    assert_args(vec![with_ip_options("R")], &["--ip-options", "R"]);
    assert_args(vec![with_ip_ttl(64)], &["--ttl", "64"]);
    assert_args(vec![with_spoof_mac("0")], &["--spoof-mac", "0"]);
    assert_args(vec![with_bad_sum()], &["--badsum"]);
}

#[test]
fn test_mtu_must_be_multiple_of_eight() {
    for mtu in [0, 12] {
        let err = Scanner::new(vec![with_mtu(mtu)]).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }
}

#[test]
fn test_output_and_misc() {
    assert_args(vec![with_verbosity(2)], &["-v2"]);
    assert_args(vec![with_debugging(1)], &["-d1"]);
    assert_args(vec![with_reason()], &["--reason"]);
    assert_args(vec![with_open_only()], &["--open"]);
    assert_args(vec![with_packet_trace()], &["--packet-trace"]);
    assert_args(vec![with_append_output()], &["--append-output"]);
    assert_args(vec![with_stylesheet("/nmap.xsl")], &["--stylesheet", "/nmap.xsl"]);
    assert_args(vec![with_webxml()], &["--webxml"]);
    assert_args(vec![with_no_stylesheet()], &["--no-stylesheet"]);
    assert_args(vec![with_stats_every(Duration::from_secs(10))], &["--stats-every", "10s"]);
    assert_args(vec![with_ipv6_scanning()], &["-6"]);
    assert_args(vec![with_aggressive_scan()], &["-A"]);
    assert_args(vec![with_data_dir("/usr/share/nmap")], &["--datadir", "/usr/share/nmap"]);
    assert_args(vec![with_send_ethernet()], &["--send-eth"]);
    assert_args(vec![with_send_ip()], &["--send-ip"]);
    assert_args(vec![with_privileged()], &["--privileged"]);
    assert_args(vec![with_unprivileged()], &["--unprivileged"]);

    let err = Scanner::new(vec![with_verbosity(10)]).unwrap_err();
    assert_eq!(err.to_string(), "value given to with_verbosity() should be between 0 and 9");
}

#[test]
fn test_arguments_follow_application_order() {
    assert_args(
        vec![
            with_target("localhost"),
            with_syn_scan(),
            with_ports("22,80"),
            with_version_intensity(7),
            with_target("10.0.0.0/24"),
            with_timing_template(Timing::Normal),
        ],
        &[
            "localhost",
            "-sS",
            "-p",
            "22,80",
            "--version-intensity",
            "7",
            "10.0.0.0/24",
            "-T3",
        ],
    );
}

#[test]
fn test_non_argument_options_add_no_tokens() -> Result<()> {
    let scanner = Scanner::new(vec![
        with_binary_path("/opt/nmap/bin/nmap"),
        with_timeout(Duration::from_secs(30)),
        with_cancellation(rnmap::CancellationToken::new()),
        with_filter_host(|_| true),
        with_filter_port(|_| true),
        with_target("localhost"),
    ])?;

    assert_eq!(scanner.args(), ["localhost"]);
    assert_eq!(
        scanner.binary_path(),
        Some(std::path::Path::new("/opt/nmap/bin/nmap"))
    );
    assert_eq!(
        scanner.command_line(),
        vec!["/opt/nmap/bin/nmap", "-oX", "-", "localhost"]
    );
    Ok(())
}

#[test]
fn test_empty_option_list() -> Result<()> {
    let scanner = Scanner::new(Vec::new())?;
    assert!(scanner.args().is_empty());
    Ok(())
}
