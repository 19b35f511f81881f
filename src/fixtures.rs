//! Captured AIVDM traffic used by the embedded decoder checks.
//!
//! One sentence per message type (three for the long-range type 27), with
//! the armored payload of each extracted alongside. Several sentences carry
//! receiver annotations after the checksum, as seen on real feeds.

pub const AI_1_A: &[u8] = b"!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";
pub const PL_1_A: &[u8] = b"177KQJ5000G?tO`K>RA1wUbN0TKH";

pub const AI_1_B: &[u8] = b"!AIVDM,1,1,,A,15N1u<PP1FJuvSRHOE6QIwwh0HQ6,0*30,d-080,S2118,t050056.00,T56.4837741,r003669946,1325394060,1325394001";
pub const PL_1_B: &[u8] = b"15N1u<PP1FJuvSRHOE6QIwwh0HQ6";

pub const AI_2_A: &[u8] = b"!AIVDM,1,1,,B,2T8Mur>pJNw77ks5q?7mdfhoOgMo,0*3A";
pub const PL_2_A: &[u8] = b"2T8Mur>pJNw77ks5q?7mdfhoOgMo";

pub const AI_3_A: &[u8] = b"!AIVDM,1,1,,B,35MC>W@01EIAn5VA4l`N2;>0015@,0*01";
pub const PL_3_A: &[u8] = b"35MC>W@01EIAn5VA4l`N2;>0015@";

pub const AI_4_A: &[u8] = b"!AIVDM,1,1,,A,403Ovl@000Htt<tSF0l4Q@100`Pq,0*28,d-109,S2105,t050056.00,T56.13718694,r003669946,1325394060,1325394001";
pub const PL_4_A: &[u8] = b"403Ovl@000Htt<tSF0l4Q@100`Pq";

pub const AI_5_A: &[u8] = b"!AIVDM,1,1,1,B,53eaFL02?;fwTPm7V219E@R1@PE8E<622222221@9hG1A7?@NCPSlm3kc5DhH8888888880,2*7F";
pub const PL_5_A: &[u8] =
    b"53eaFL02?;fwTPm7V219E@R1@PE8E<622222221@9hG1A7?@NCPSlm3kc5DhH8888888880";

pub const AI_6_A: &[u8] = b"!AIVDM,1,1,,A,603Owlh0>5Q@04000000,0*01";
pub const PL_6_A: &[u8] = b"603Owlh0>5Q@04000000";

pub const AI_7_A: &[u8] = b"!AIVDM,1,1,,A,71AqOpwIFFI:vJCjWejS9I:QGsFw,0*62";
pub const PL_7_A: &[u8] = b"71AqOpwIFFI:vJCjWejS9I:QGsFw";

pub const AI_8_A: &[u8] = b"!AIVDM,1,1,,B,803Ovrh0EP:024`@02PN04da=3V<>N0000,4*39";
pub const PL_8_A: &[u8] = b"803Ovrh0EP:024`@02PN04da=3V<>N0000";

pub const AI_9_A: &[u8] = b"!AIVDM,1,1,,B,9muc;QvN2`TG6BE76wm;U7u>K>?b,0*64";
pub const PL_9_A: &[u8] = b"9muc;QvN2`TG6BE76wm;U7u>K>?b";

pub const AI_10_A: &[u8] = b"!AIVDM,1,1,,A,:5C=uP0j4I3P,0*36";
pub const PL_10_A: &[u8] = b":5C=uP0j4I3P";

pub const AI_11_A: &[u8] = b"!AIVDM,1,1,,A,;8IVO`1ua>0:pqGjwL?i6P100000,0*22";
pub const PL_11_A: &[u8] = b";8IVO`1ua>0:pqGjwL?i6P100000";

pub const AI_12_A: &[u8] = b"!AIVDM,1,1,,B,<rOwUArW>mATsl8mEu6cvWeww1gsMlTPAh,4*62";
pub const PL_12_A: &[u8] = b"<rOwUArW>mATsl8mEu6cvWeww1gsMlTPAh";

/// Type 12 payload whose nominal 936-bit text region runs past the
/// transmitted length.
pub const PL_12_TEXT: &[u8] =
    b"<5MwpVn0AAup=C7P6B?=Pknnqqqoho0<5MwpVr0AAup=C7P6B?=Pknnqqqoho0<5MwpVr0AAup=C7P6B?=Pknnqqqoho0";

pub const AI_13_A: &[u8] = b"!AIVDM,1,1,,A,=8157oQGOv9f,0*0F";
pub const PL_13_A: &[u8] = b"=8157oQGOv9f";

pub const AI_14_A: &[u8] = b"!AIVDM,1,1,,B,>Co2MsFw3gwqfk=6uisakraA`@dS8l`,2*48";
pub const PL_14_A: &[u8] = b">Co2MsFw3gwqfk=6uisakraA`@dS8l`";

pub const AI_15_A: &[u8] = b"!AIVDM,1,1,,A,?5N29b18w<3PD00,2*6C";
pub const PL_15_A: &[u8] = b"?5N29b18w<3PD00";

pub const AI_16_A: &[u8] = b"!AIVDM,1,1,,A,@pCdoqggJc1KHfk`lIowv;WB,0*3C";
pub const PL_16_A: &[u8] = b"@pCdoqggJc1KHfk`lIowv;WB";

pub const AI_17_A: &[u8] = b"!AIVDM,1,1,,A,Asgw4Gg:94e7evilw4kKvvwHbA8i@V:QEEP,2*62,d-127,S0388,t032710.00,T10.35675633,r09NALP1,1272425231";
pub const PL_17_A: &[u8] = b"Asgw4Gg:94e7evilw4kKvvwHbA8i@V:QEEP";

pub const AI_18_A: &[u8] = b"!AIVDM,1,1,,B,BE2K5MP005kN8WVSrcP03wb5oP00,0*54,d-085,S0782,t000020.00,T20.85679339,r13CSPO1,1272412821";
pub const PL_18_A: &[u8] = b"BE2K5MP005kN8WVSrcP03wb5oP00";

pub const AI_19_A: &[u8] = b"!AIVDM,1,1,6,A,C5MtL4eP0FK?P@4I96hG`urH@2fF0000000000000000?P000020,0*4D,d-081,S1988,t002853.00,T53.01528638,r08RROB1,1272414533";
pub const PL_19_A: &[u8] = b"C5MtL4eP0FK?P@4I96hG`urH@2fF0000000000000000?P000020";

pub const AI_20_A: &[u8] = b"!AIVDM,1,1,,A,D02u=ThfmNfpnaN9H0,4*43";
pub const PL_20_A: &[u8] = b"D02u=ThfmNfpnaN9H0";

pub const AI_21_A: &[u8] = b"!AIVDM,1,1,,A,E4eGk5?2Qh;Pb2a@8bPV4b<h1:WsVHh1>3t4p00000dP0V@,2*2E,b003669705,1272413636";
pub const PL_21_A: &[u8] = b"E4eGk5?2Qh;Pb2a@8bPV4b<h1:WsVHh1>3t4p00000dP0V@";

pub const AI_22_A: &[u8] = b"!AIVDM,1,1,,A,F030p2j2N2P6S3iW8=4P3;r20000,0*24";
pub const PL_22_A: &[u8] = b"F030p2j2N2P6S3iW8=4P3;r20000";

pub const AI_23_A: &[u8] = b"!AIVDM,1,1,,A,G2IT9vuB6dus:bgcCtm4SUMrVgL,2*16";
pub const PL_23_A: &[u8] = b"G2IT9vuB6dus:bgcCtm4SUMrVgL";

pub const AI_24_A: &[u8] = b"!AIVDM,1,1,,B,H5NHBTTU653hhhiG45oqkp1@D340,0*39";
pub const PL_24_A: &[u8] = b"H5NHBTTU653hhhiG45oqkp1@D340";

pub const AI_25_A: &[u8] = b"!AIVDM,1,1,,B,I5Mwp<BQ=?rKuen5Q;Na8DncdWWN,0*52";
pub const PL_25_A: &[u8] = b"I5Mwp<BQ=?rKuen5Q;Na8DncdWWN";

pub const AI_26_A: &[u8] = b"!AIVDM,1,1,,B,JFDwLv9U;AG0gOLROo<U,0*3E";
pub const PL_26_A: &[u8] = b"JFDwLv9U;AG0gOLROo<U";

pub const AI_27_A: &[u8] = b"!AIVDM,1,1,,A,KvQ:1o`7EBrBQ`?w,0*37,d-127,S0258,t111606.00,T06.8887855,r003669946,1325416567,1325416509";
pub const PL_27_A: &[u8] = b"KvQ:1o`7EBrBQ`?w";

pub const AI_27_B: &[u8] = b"!AIVDM,1,1,,A,KvWMIfCNvoNqRAsh,0*0D";
pub const PL_27_B: &[u8] = b"KvWMIfCNvoNqRAsh";

pub const AI_27_C: &[u8] = b"!AIVDM,1,1,,B,Kq2Qm7R2JNtjVq52,0*7C";
pub const PL_27_C: &[u8] = b"Kq2Qm7R2JNtjVq52";

/// Every sentence above, in message-type order.
pub const ALL_SENTENCES: &[&[u8]] = &[
    AI_1_A, AI_1_B, AI_2_A, AI_3_A, AI_4_A, AI_5_A, AI_6_A, AI_7_A, AI_8_A, AI_9_A, AI_10_A,
    AI_11_A, AI_12_A, AI_13_A, AI_14_A, AI_15_A, AI_16_A, AI_17_A, AI_18_A, AI_19_A, AI_20_A,
    AI_21_A, AI_22_A, AI_23_A, AI_24_A, AI_25_A, AI_26_A, AI_27_A, AI_27_B, AI_27_C,
];

/// Every payload above, matching [`ALL_SENTENCES`] index for index.
pub const ALL_PAYLOADS: &[&[u8]] = &[
    PL_1_A, PL_1_B, PL_2_A, PL_3_A, PL_4_A, PL_5_A, PL_6_A, PL_7_A, PL_8_A, PL_9_A, PL_10_A,
    PL_11_A, PL_12_A, PL_13_A, PL_14_A, PL_15_A, PL_16_A, PL_17_A, PL_18_A, PL_19_A, PL_20_A,
    PL_21_A, PL_22_A, PL_23_A, PL_24_A, PL_25_A, PL_26_A, PL_27_A, PL_27_B, PL_27_C,
];
