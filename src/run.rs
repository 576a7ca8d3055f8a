//! Typed view of nmap's XML report (`-oX`).
//!
//! Field layout follows the `nmap.dtd` element/attribute names; attributes
//! are mapped with quick-xml's `@` prefix convention and element text with
//! `$text`. Anything nmap emits that is not modelled here is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Root `<nmaprun>` element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Run {
    #[serde(rename = "@args", default)]
    pub args: String,
    #[serde(rename = "@profile_name", default)]
    pub profile_name: String,
    #[serde(rename = "@scanner", default)]
    pub scanner: String,
    #[serde(rename = "@start", default, deserialize_with = "epoch::deserialize")]
    pub start: Option<DateTime<Utc>>,
    #[serde(rename = "@startstr", default)]
    pub start_str: String,
    #[serde(rename = "@version", default)]
    pub version: String,
    #[serde(rename = "@xmloutputversion", default)]
    pub xml_output_version: String,

    #[serde(rename = "scaninfo", default)]
    pub scan_info: Vec<ScanInfo>,
    #[serde(default)]
    pub verbose: Option<Level>,
    #[serde(default)]
    pub debugging: Option<Level>,
    #[serde(rename = "taskbegin", default)]
    pub task_begin: Vec<Task>,
    #[serde(rename = "taskprogress", default)]
    pub task_progress: Vec<TaskProgress>,
    #[serde(rename = "taskend", default)]
    pub task_end: Vec<Task>,
    #[serde(rename = "host", default)]
    pub hosts: Vec<Host>,
    #[serde(rename = "runstats", default)]
    pub stats: Option<Stats>,
}

impl Run {
    /// Hosts nmap reported as up.
    pub fn hosts_up(&self) -> impl Iterator<Item = &Host> {
        self.hosts.iter().filter(|h| h.is_up())
    }

    pub fn port_count(&self) -> usize {
        self.hosts.iter().map(|h| h.ports.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScanInfo {
    #[serde(rename = "@type", default)]
    pub scan_type: String,
    #[serde(rename = "@protocol", default)]
    pub protocol: String,
    #[serde(rename = "@numservices", default)]
    pub num_services: u32,
    #[serde(rename = "@services", default)]
    pub services: String,
    #[serde(rename = "@scanflags", default)]
    pub scan_flags: String,
}

/// `<verbose level=".."/>` and `<debugging level=".."/>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Level {
    #[serde(rename = "@level", default)]
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Task {
    #[serde(rename = "@task", default)]
    pub task: String,
    #[serde(rename = "@time", default, deserialize_with = "epoch::deserialize")]
    pub time: Option<DateTime<Utc>>,
    #[serde(rename = "@extrainfo", default)]
    pub extra_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskProgress {
    #[serde(rename = "@task", default)]
    pub task: String,
    #[serde(rename = "@time", default, deserialize_with = "epoch::deserialize")]
    pub time: Option<DateTime<Utc>>,
    #[serde(rename = "@percent", default)]
    pub percent: f32,
    #[serde(rename = "@remaining", default)]
    pub remaining: u64,
    #[serde(rename = "@etc", default, deserialize_with = "epoch::deserialize")]
    pub etc: Option<DateTime<Utc>>,
}

/// A scanned endpoint. Deserialized through [`RawHost`] so that the
/// `<ports>` and `<hostnames>` wrappers flatten into plain vectors.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawHost")]
pub struct Host {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub comment: String,
    pub status: Status,
    pub addresses: Vec<Address>,
    pub hostnames: Vec<Hostname>,
    pub ports: Vec<Port>,
    pub extra_ports: Vec<ExtraPorts>,
    pub os: Option<Os>,
    pub uptime: Option<Uptime>,
    pub distance: Option<u32>,
    pub trace: Option<Trace>,
    pub times: Option<Times>,
    pub scripts: Vec<Script>,
}

impl Host {
    pub fn is_up(&self) -> bool {
        self.status.state == "up"
    }

    /// First IPv4/IPv6 address, falling back to whatever address comes first.
    pub fn primary_address(&self) -> Option<&str> {
        self.addresses
            .iter()
            .find(|a| a.addr_type == "ipv4" || a.addr_type == "ipv6")
            .or_else(|| self.addresses.first())
            .map(|a| a.addr.as_str())
    }

    pub fn mac_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.addr_type == "mac")
    }

    pub fn open_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_open())
    }
}

#[derive(Deserialize)]
struct RawHost {
    #[serde(rename = "@starttime", default, deserialize_with = "epoch::deserialize")]
    start_time: Option<DateTime<Utc>>,
    #[serde(rename = "@endtime", default, deserialize_with = "epoch::deserialize")]
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "@comment", default)]
    comment: String,
    #[serde(default)]
    status: Status,
    #[serde(rename = "address", default)]
    addresses: Vec<Address>,
    #[serde(default)]
    hostnames: Option<RawHostnames>,
    #[serde(default)]
    ports: Option<RawPorts>,
    #[serde(default)]
    os: Option<Os>,
    #[serde(default)]
    uptime: Option<Uptime>,
    #[serde(default)]
    distance: Option<Distance>,
    #[serde(default)]
    trace: Option<Trace>,
    #[serde(default)]
    times: Option<Times>,
    #[serde(rename = "hostscript", default)]
    host_scripts: Option<RawHostScripts>,
}

#[derive(Deserialize, Default)]
struct RawHostnames {
    #[serde(rename = "hostname", default)]
    items: Vec<Hostname>,
}

#[derive(Deserialize, Default)]
struct RawPorts {
    #[serde(rename = "extraports", default)]
    extra: Vec<ExtraPorts>,
    #[serde(rename = "port", default)]
    items: Vec<Port>,
}

#[derive(Deserialize, Default)]
struct RawHostScripts {
    #[serde(rename = "script", default)]
    items: Vec<Script>,
}

#[derive(Deserialize)]
struct Distance {
    #[serde(rename = "@value", default)]
    value: u32,
}

impl From<RawHost> for Host {
    fn from(raw: RawHost) -> Self {
        let (extra_ports, ports) = raw
            .ports
            .map(|p| (p.extra, p.items))
            .unwrap_or_default();

        Self {
            start_time: raw.start_time,
            end_time: raw.end_time,
            comment: raw.comment,
            status: raw.status,
            addresses: raw.addresses,
            hostnames: raw.hostnames.map(|h| h.items).unwrap_or_default(),
            ports,
            extra_ports,
            os: raw.os,
            uptime: raw.uptime,
            distance: raw.distance.map(|d| d.value),
            trace: raw.trace,
            times: raw.times,
            scripts: raw.host_scripts.map(|s| s.items).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Status {
    #[serde(rename = "@state", default)]
    pub state: String,
    #[serde(rename = "@reason", default)]
    pub reason: String,
    #[serde(rename = "@reason_ttl", default)]
    pub reason_ttl: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Address {
    #[serde(rename = "@addr", default)]
    pub addr: String,
    #[serde(rename = "@addrtype", default)]
    pub addr_type: String,
    #[serde(rename = "@vendor", default)]
    pub vendor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hostname {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@type", default)]
    pub kind: String,
}

/// `<extraports>`: ports nmap folded into a single line ("997 closed").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtraPorts {
    #[serde(rename = "@state", default)]
    pub state: String,
    #[serde(rename = "@count", default)]
    pub count: u32,
    #[serde(rename = "extrareasons", default)]
    pub reasons: Vec<ExtraReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtraReason {
    #[serde(rename = "@reason", default)]
    pub reason: String,
    #[serde(rename = "@count", default)]
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Port {
    #[serde(rename = "@portid", default)]
    pub id: u16,
    #[serde(rename = "@protocol", default)]
    pub protocol: String,
    #[serde(default)]
    pub state: PortState,
    #[serde(default)]
    pub service: Option<Service>,
    #[serde(rename = "script", default)]
    pub scripts: Vec<Script>,
}

impl Port {
    pub fn is_open(&self) -> bool {
        self.state.state == "open"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PortState {
    #[serde(rename = "@state", default)]
    pub state: String,
    #[serde(rename = "@reason", default)]
    pub reason: String,
    #[serde(rename = "@reason_ip", default)]
    pub reason_ip: String,
    #[serde(rename = "@reason_ttl", default)]
    pub reason_ttl: u32,
}

/// Service/version detection result for a port (`-sV`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Service {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@product", default)]
    pub product: String,
    #[serde(rename = "@version", default)]
    pub version: String,
    #[serde(rename = "@extrainfo", default)]
    pub extra_info: String,
    #[serde(rename = "@hostname", default)]
    pub hostname: String,
    #[serde(rename = "@ostype", default)]
    pub os_type: String,
    #[serde(rename = "@devicetype", default)]
    pub device_type: String,
    #[serde(rename = "@tunnel", default)]
    pub tunnel: String,
    #[serde(rename = "@method", default)]
    pub method: String,
    #[serde(rename = "@conf", default)]
    pub confidence: u8,
    #[serde(rename = "cpe", default)]
    pub cpes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@output", default)]
    pub output: String,
    #[serde(rename = "elem", default)]
    pub elements: Vec<Element>,
    #[serde(rename = "table", default)]
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Table {
    #[serde(rename = "@key", default)]
    pub key: String,
    #[serde(rename = "elem", default)]
    pub elements: Vec<Element>,
    #[serde(rename = "table", default)]
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Element {
    #[serde(rename = "@key", default)]
    pub key: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// OS detection block (`-O`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Os {
    #[serde(rename = "portused", default)]
    pub ports_used: Vec<PortUsed>,
    #[serde(rename = "osmatch", default)]
    pub matches: Vec<OsMatch>,
    #[serde(rename = "osfingerprint", default)]
    pub fingerprints: Vec<OsFingerprint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PortUsed {
    #[serde(rename = "@state", default)]
    pub state: String,
    #[serde(rename = "@proto", default)]
    pub protocol: String,
    #[serde(rename = "@portid", default)]
    pub id: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OsMatch {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@accuracy", default)]
    pub accuracy: u8,
    #[serde(rename = "@line", default)]
    pub line: u32,
    #[serde(rename = "osclass", default)]
    pub classes: Vec<OsClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OsClass {
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@vendor", default)]
    pub vendor: String,
    #[serde(rename = "@osfamily", default)]
    pub family: String,
    #[serde(rename = "@osgen", default)]
    pub generation: String,
    #[serde(rename = "@accuracy", default)]
    pub accuracy: u8,
    #[serde(rename = "cpe", default)]
    pub cpes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OsFingerprint {
    #[serde(rename = "@fingerprint", default)]
    pub fingerprint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Uptime {
    #[serde(rename = "@seconds", default)]
    pub seconds: u64,
    #[serde(rename = "@lastboot", default)]
    pub last_boot: String,
}

/// `--traceroute` output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Trace {
    #[serde(rename = "@port", default)]
    pub port: u16,
    #[serde(rename = "@proto", default)]
    pub protocol: String,
    #[serde(rename = "hop", default)]
    pub hops: Vec<Hop>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hop {
    #[serde(rename = "@ttl", default)]
    pub ttl: u32,
    #[serde(rename = "@rtt", default)]
    pub rtt: String,
    #[serde(rename = "@ipaddr", default)]
    pub ip_addr: String,
    #[serde(rename = "@host", default)]
    pub host: String,
}

/// Round-trip timing estimates, in microseconds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Times {
    #[serde(rename = "@srtt", default)]
    pub srtt: i64,
    #[serde(rename = "@rttvar", default)]
    pub rttvar: i64,
    #[serde(rename = "@to", default)]
    pub to: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub finished: Finished,
    #[serde(default)]
    pub hosts: HostStats,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Finished {
    #[serde(rename = "@time", default, deserialize_with = "epoch::deserialize")]
    pub time: Option<DateTime<Utc>>,
    #[serde(rename = "@timestr", default)]
    pub time_str: String,
    #[serde(rename = "@elapsed", default)]
    pub elapsed: f32,
    #[serde(rename = "@summary", default)]
    pub summary: String,
    #[serde(rename = "@exit", default)]
    pub exit: String,
    #[serde(rename = "@errormsg", default)]
    pub error_msg: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct HostStats {
    #[serde(rename = "@up", default)]
    pub up: u32,
    #[serde(rename = "@down", default)]
    pub down: u32,
    #[serde(rename = "@total", default)]
    pub total: u32,
}

/// nmap writes timestamps as unix seconds.
mod epoch {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(secs) => {
                let secs: i64 = secs.parse().map_err(D::Error::custom)?;
                Ok(DateTime::from_timestamp(secs, 0))
            }
        }
    }
}
