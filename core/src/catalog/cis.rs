use super::CatalogEntry;
use super::model::ImplementationGroup::{IG1, IG2, IG3};

// CIS Controls v8 safeguards.
pub(super) const CIS_CONTROLS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "CIS-1.1",
        name: "Establish and Maintain Detailed Enterprise Asset Inventory",
        description: "Establish and maintain an accurate, detailed, and up-to-date inventory of all enterprise assets with the potential to store, process, or transmit data, including: end-user devices, network devices, servers, and applications.",
        nist_mapping: &["CM-8", "PM-5"],
        level: IG1,
        category: "1. Inventory and Control of Enterprise Assets",
    },
    CatalogEntry {
        id: "CIS-1.2",
        name: "Address Unauthorized Assets",
        description: "Ensure that a process exists to address unauthorized assets on a regular basis. The enterprise may choose to remove the asset from the network, deny the asset from connecting remotely to the network, or quarantine the asset.",
        nist_mapping: &["CM-8(3)"],
        level: IG1,
        category: "1. Inventory and Control of Enterprise Assets",
    },
    CatalogEntry {
        id: "CIS-1.3",
        name: "Utilize an Active Discovery Tool",
        description: "Utilize an active discovery tool to identify assets connected to the enterprise's network. Configure the active discovery tool to execute daily, or more frequently.",
        nist_mapping: &["CM-8(2)"],
        level: IG2,
        category: "1. Inventory and Control of Enterprise Assets",
    },
    CatalogEntry {
        id: "CIS-1.4",
        name: "Use Dynamic Host Configuration Protocol (DHCP) Logging",
        description: "Use DHCP logging on all DHCP servers or Internet Protocol (IP) address management tools to update the enterprise's asset inventory. Review and use logs to update the enterprise's asset inventory.",
        nist_mapping: &["CM-8", "AU-2"],
        level: IG2,
        category: "1. Inventory and Control of Enterprise Assets",
    },
    CatalogEntry {
        id: "CIS-1.5",
        name: "Use a Passive Asset Discovery Tool",
        description: "Use a passive discovery tool to identify assets connected to the enterprise's network. Configure the passive discovery tool to execute daily, or more frequently.",
        nist_mapping: &["CM-8(2)"],
        level: IG3,
        category: "1. Inventory and Control of Enterprise Assets",
    },
    CatalogEntry {
        id: "CIS-2.1",
        name: "Establish and Maintain a Software Inventory",
        description: "Establish and maintain a detailed inventory of all licensed software installed on enterprise assets. The software inventory must document the title, publisher, initial install/use date, and business purpose for each entry.",
        nist_mapping: &["CM-8(1)", "CM-8(2)"],
        level: IG1,
        category: "2. Inventory and Control of Software Assets",
    },
    CatalogEntry {
        id: "CIS-2.2",
        name: "Ensure Authorized Software is Currently Supported",
        description: "Ensure that only software applications or operating systems currently supported and receiving vendor updates are added to the enterprise's authorized software inventory.",
        nist_mapping: &["CM-11", "SI-2"],
        level: IG1,
        category: "2. Inventory and Control of Software Assets",
    },
    CatalogEntry {
        id: "CIS-2.3",
        name: "Address Unauthorized Software",
        description: "Ensure that unauthorized software is either removed from the network or the inventory is updated to include the software as authorized.",
        nist_mapping: &["CM-7", "CM-8(5)"],
        level: IG1,
        category: "2. Inventory and Control of Software Assets",
    },
    CatalogEntry {
        id: "CIS-2.4",
        name: "Utilize Automated Software Inventory Tools",
        description: "Utilize software inventory tools throughout the enterprise to automate the documentation of all software on enterprise assets.",
        nist_mapping: &["CM-8(2)"],
        level: IG2,
        category: "2. Inventory and Control of Software Assets",
    },
    CatalogEntry {
        id: "CIS-2.5",
        name: "Allowlist Authorized Software",
        description: "Use technical controls, such as application allowlisting, to ensure that only authorized software can execute on enterprise assets.",
        nist_mapping: &["CM-7(4)", "CM-7(5)"],
        level: IG2,
        category: "2. Inventory and Control of Software Assets",
    },
    CatalogEntry {
        id: "CIS-2.6",
        name: "Allowlist Authorized Libraries",
        description: "Use technical controls to ensure that only authorized software libraries, such as specific .dll, .ocx, .so, etc., files are allowed to load into a system process.",
        nist_mapping: &["CM-7(5)"],
        level: IG3,
        category: "2. Inventory and Control of Software Assets",
    },
    CatalogEntry {
        id: "CIS-2.7",
        name: "Allowlist Authorized Scripts",
        description: "Use technical controls, such as digital signatures and version control, to ensure that only authorized scripts, such as specific .ps1, .py, etc., files are allowed to execute.",
        nist_mapping: &["CM-7(5)"],
        level: IG3,
        category: "2. Inventory and Control of Software Assets",
    },
    CatalogEntry {
        id: "CIS-3.1",
        name: "Establish and Maintain a Data Management Process",
        description: "Establish and maintain a data management process. In the process, address data sensitivity, data owner, handling of data, data retention limits, and disposal requirements.",
        nist_mapping: &["PM-5", "MP-1"],
        level: IG1,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.2",
        name: "Establish and Maintain a Data Inventory",
        description: "Establish and maintain a data inventory, based on the enterprise's data management process.",
        nist_mapping: &["CM-8", "PM-5"],
        level: IG1,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.3",
        name: "Configure Data Access Control Lists",
        description: "Configure data access control lists based on a user's need to know.",
        nist_mapping: &["AC-3", "AC-24"],
        level: IG1,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.4",
        name: "Enforce Data Retention",
        description: "Enforce applicable data retention practices, as specified in the enterprise's data management process.",
        nist_mapping: &["AU-11", "SI-12"],
        level: IG1,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.5",
        name: "Securely Dispose of Data",
        description: "Securely dispose of data as outlined in the enterprise's data management process.",
        nist_mapping: &["MP-6"],
        level: IG1,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.6",
        name: "Encrypt Data on End-User Devices",
        description: "Encrypt data on end-user devices containing sensitive data.",
        nist_mapping: &["SC-28(1)"],
        level: IG1,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.7",
        name: "Establish and Maintain a Data Classification Scheme",
        description: "Establish and maintain a data classification scheme to categorize data based on sensitivity.",
        nist_mapping: &["RA-2"],
        level: IG2,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.8",
        name: "Document Data Flows",
        description: "Document data flows across the enterprise in a data flow diagram. Review and update data flow documentation periodically.",
        nist_mapping: &["PM-5", "SA-8"],
        level: IG2,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.9",
        name: "Encrypt Data on Removable Media",
        description: "Encrypt data on removable media.",
        nist_mapping: &["MP-4", "MP-7", "SC-28"],
        level: IG2,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.10",
        name: "Encrypt Sensitive Data in Transit",
        description: "Encrypt sensitive data in transit.",
        nist_mapping: &["SC-8", "SC-8(1)"],
        level: IG2,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.11",
        name: "Encrypt Sensitive Data at Rest",
        description: "Encrypt sensitive data at rest on servers, applications, and databases containing sensitive data.",
        nist_mapping: &["SC-28", "SC-28(1)"],
        level: IG2,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.12",
        name: "Segment Data Processing and Storage Based on Sensitivity",
        description: "Segment data processing and storage based on the sensitivity of the data.",
        nist_mapping: &["SC-2", "SC-7"],
        level: IG3,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.13",
        name: "Deploy a Data Loss Prevention Solution",
        description: "Deploy a data loss prevention (DLP) solution to track and block the unauthorized use or transmission of sensitive information.",
        nist_mapping: &["SI-4(4)", "SI-4(23)"],
        level: IG3,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-3.14",
        name: "Log Sensitive Data Access",
        description: "Log sensitive data access, including modification and disposition.",
        nist_mapping: &["AU-3", "AU-12"],
        level: IG3,
        category: "3. Data Protection",
    },
    CatalogEntry {
        id: "CIS-4.1",
        name: "Establish and Maintain a Secure Configuration Process",
        description: "Establish and maintain a secure configuration process for enterprise assets (end-user devices, including portable and mobile, network devices, and servers) and software (operating systems and applications).",
        nist_mapping: &["CM-6", "CM-1"],
        level: IG1,
        category: "4. Secure Configuration of Enterprise Assets and Software",
    },
    CatalogEntry {
        id: "CIS-4.2",
        name: "Establish and Maintain a Secure Configuration Process for Network Infrastructure",
        description: "Establish and maintain a secure configuration process for network infrastructure.",
        nist_mapping: &["CM-6", "CM-2(2)"],
        level: IG1,
        category: "4. Secure Configuration of Enterprise Assets and Software",
    },
    CatalogEntry {
        id: "CIS-5.1",
        name: "Establish and Maintain an Inventory of Accounts",
        description: "Establish and maintain an inventory of all accounts managed in the enterprise.",
        nist_mapping: &["AC-2"],
        level: IG1,
        category: "5. Account Management",
    },
    CatalogEntry {
        id: "CIS-6.1",
        name: "Establish an Access Granting Process",
        description: "Establish and follow a process, preferably automated, for granting access to enterprise assets upon new hire, rights grant, or role change of a user.",
        nist_mapping: &["AC-2"],
        level: IG1,
        category: "6. Access Control Management",
    },
    CatalogEntry {
        id: "CIS-7.1",
        name: "Establish and Maintain a Vulnerability Management Process",
        description: "Establish and maintain a documented vulnerability management process for enterprise assets.",
        nist_mapping: &["RA-3", "RA-5", "SA-11"],
        level: IG1,
        category: "7. Continuous Vulnerability Management",
    },
    CatalogEntry {
        id: "CIS-8.1",
        name: "Establish and Maintain an Audit Log Management Process",
        description: "Establish and maintain an audit log management process that defines the enterprise's logging requirements.",
        nist_mapping: &["AU-1", "AU-3", "AU-4", "AU-5", "AU-8", "AU-12"],
        level: IG1,
        category: "8. Audit Log Management",
    },
    CatalogEntry {
        id: "CIS-9.1",
        name: "Ensure Use of Only Fully Supported Browsers and Email Clients",
        description: "Ensure only fully supported browsers and email clients are allowed to execute in the enterprise, only using the latest version of browsers and email clients provided through the vendor.",
        nist_mapping: &["CM-7", "CM-11"],
        level: IG1,
        category: "9. Email and Web Browser Protections",
    },
    CatalogEntry {
        id: "CIS-10.1",
        name: "Deploy and Maintain Anti-Malware Software",
        description: "Deploy and maintain anti-malware software on all enterprise assets.",
        nist_mapping: &["SI-3", "SI-3(1)"],
        level: IG1,
        category: "10. Malware Defenses",
    },
    CatalogEntry {
        id: "CIS-11.1",
        name: "Establish and Maintain a Data Recovery Process",
        description: "Establish and maintain a data recovery process.",
        nist_mapping: &["CP-9", "CP-10"],
        level: IG1,
        category: "11. Data Recovery",
    },
    CatalogEntry {
        id: "CIS-12.1",
        name: "Ensure Network Infrastructure is Up-to-Date",
        description: "Ensure network infrastructure is kept up-to-date. Example implementations include running the latest stable release of software and/or using currently supported network-as-a-service (NaaS) offerings.",
        nist_mapping: &["CM-2", "CM-6", "SI-2"],
        level: IG1,
        category: "12. Network Infrastructure Management",
    },
    CatalogEntry {
        id: "CIS-13.1",
        name: "Centralize Security Event Alerting",
        description: "Centralize security event alerting across enterprise assets for collection, correlation, and analysis.",
        nist_mapping: &["AU-6", "SI-4"],
        level: IG1,
        category: "13. Network Monitoring and Defense",
    },
    CatalogEntry {
        id: "CIS-14.1",
        name: "Establish and Maintain a Security Awareness Program",
        description: "Establish and maintain a security awareness program.",
        nist_mapping: &["AT-1", "AT-2"],
        level: IG1,
        category: "14. Security Awareness and Skills Training",
    },
    CatalogEntry {
        id: "CIS-15.1",
        name: "Establish and Maintain an Inventory of Service Providers",
        description: "Establish and maintain an inventory of service providers.",
        nist_mapping: &["SA-9", "PM-9"],
        level: IG1,
        category: "15. Service Provider Management",
    },
    CatalogEntry {
        id: "CIS-16.1",
        name: "Establish and Maintain a Secure Application Development Process",
        description: "Establish and maintain a secure application development process.",
        nist_mapping: &["SA-3", "SA-8", "SA-15", "SA-15(1)"],
        level: IG1,
        category: "16. Application Software Security",
    },
    CatalogEntry {
        id: "CIS-17.1",
        name: "Designate Personnel to Manage Incident Handling",
        description: "Designate personnel to manage incident handling.",
        nist_mapping: &["IR-2", "IR-4", "IR-7"],
        level: IG1,
        category: "17. Incident Response Management",
    },
    CatalogEntry {
        id: "CIS-18.1",
        name: "Establish and Maintain a Penetration Testing Program",
        description: "Establish and maintain a penetration testing program appropriate to the size, complexity, and maturity of the enterprise.",
        nist_mapping: &["CA-8", "CA-8(1)"],
        level: IG2,
        category: "18. Penetration Testing",
    },
];
